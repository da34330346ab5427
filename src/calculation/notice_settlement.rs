//! Indemnified notice payment and unfulfilled notice deduction.

use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::models::{AuditStep, NoticeMode, SettlementInput};

use super::calendar::clamp_i32;
use super::money::{daily_amount, round_money};
use super::notice_period::NoticePeriodResult;

/// Legal reference for indemnified notice and its deduction.
pub const NOTICE_SETTLEMENT_REF: &str = "CLT art. 487, §§1º-2º";

/// The result of settling the notice period.
#[derive(Debug, Clone)]
pub struct NoticeSettlementResult {
    /// Indemnified notice receivable by the employee.
    pub payment: Decimal,
    /// Unfulfilled notice days deducted on resignation (0..=30).
    pub deducted_days: i32,
    /// Unfulfilled notice payable by the employee.
    pub deduction: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the notice payment and the resignation notice deduction.
///
/// # Behavior
///
/// - Categories that receive indemnified notice are paid
///   `salary / divisor x notice_days x notice_factor`, but only when notice is
///   paid in lieu. Worked notice is covered by ordinary salary and yields no
///   separate payment here.
/// - On resignation, unfulfilled notice days (clamped to `0..=30`) are deducted
///   at the daily rate.
pub fn calculate_notice_settlement(
    input: &SettlementInput,
    notice: &NoticePeriodResult,
    rules: &SettlementRules,
    step_number: u32,
) -> NoticeSettlementResult {
    let salary = input.effective_salary();

    let paid = input.category.receives_indemnified_notice()
        && notice.notice_days > 0
        && input.notice.mode == NoticeMode::PaidInLieu;
    let payment = if paid {
        round_money(
            salary * Decimal::from(notice.notice_days) * notice.notice_factor
                / Decimal::from(rules.daily_divisor),
        )
    } else {
        Decimal::ZERO
    };

    let deducted_days = if input.category.owes_unfulfilled_notice() {
        clamp_i32(input.notice.unfulfilled_days_on_resignation, 0, 30)
    } else {
        0
    };
    let deduction = if deducted_days > 0 {
        daily_amount(salary, Decimal::from(deducted_days), rules.daily_divisor)
    } else {
        Decimal::ZERO
    };

    let reasoning = if paid {
        format!(
            "${} / {} x {} days x {} = ${}",
            salary.normalize(),
            rules.daily_divisor,
            notice.notice_days,
            notice.notice_factor.normalize(),
            payment.normalize()
        )
    } else if deducted_days > 0 {
        format!(
            "Resignation with {} unfulfilled notice days: ${} / {} x {} = ${} deducted",
            deducted_days,
            salary.normalize(),
            rules.daily_divisor,
            deducted_days,
            deduction.normalize()
        )
    } else {
        format!(
            "No notice payment or deduction ({} termination, notice {})",
            input.category.as_str(),
            input.notice.mode.as_str()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_settlement".to_string(),
        rule_name: "Notice Settlement".to_string(),
        legal_ref: NOTICE_SETTLEMENT_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "category": input.category.as_str(),
            "notice_mode": input.notice.mode.as_str(),
            "notice_days": notice.notice_days,
            "notice_factor": notice.notice_factor.normalize().to_string(),
            "unfulfilled_days": input.notice.unfulfilled_days_on_resignation
        }),
        output: serde_json::json!({
            "payment": payment.normalize().to_string(),
            "deducted_days": deducted_days,
            "deduction": deduction.normalize().to_string()
        }),
        reasoning,
    };

    NoticeSettlementResult {
        payment,
        deducted_days,
        deduction,
        audit_step,
    }
}

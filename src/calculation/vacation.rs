//! Vacation pay calculation.
//!
//! Expired vacation periods are paid in full; proportional vacation is paid
//! in twelfths. Both carry the constitutional one-third bonus (CF art. 7º, XVII).

use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::models::{AuditStep, SettlementInput};

use super::calendar::clamp_i32;
use super::money::round_money;

/// Legal reference for vacation pay and its bonus.
pub const VACATION_REF: &str = "CF art. 7º, XVII; CLT art. 146";

/// Maximum expired vacation periods that can be owed.
pub const MAX_EXPIRED_PERIODS: i32 = 2;

/// Maximum proportional months the caller can report.
pub const MAX_PROPORTIONAL_MONTHS: i32 = 11;

/// The result of calculating vacation pay.
#[derive(Debug, Clone)]
pub struct VacationPayResult {
    /// Expired periods after clamping (0..=2).
    pub expired_periods: i32,
    /// Proportional months after clamping and the current-month adjustment (0..=12).
    pub proportional_months: i32,
    /// Pay for expired periods including the bonus.
    pub expired_amount: Decimal,
    /// Pay for proportional months including the bonus.
    pub proportional_amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates expired and proportional vacation pay.
///
/// # Behavior
///
/// - Expired periods are clamped to `0..=2` and paid as whole salaries plus bonus
/// - Proportional months are clamped to `0..=11`, one is added when the current
///   month reached 15 days, and the total is clamped to `0..=12`
/// - Dismissal for cause forfeits proportional vacation; expired periods
///   remain owed
pub fn calculate_vacation_pay(
    input: &SettlementInput,
    rules: &SettlementRules,
    step_number: u32,
) -> VacationPayResult {
    let salary = input.effective_salary();
    let divisor = Decimal::from(rules.vacation.bonus_divisor);
    let with_bonus = (divisor + Decimal::ONE) / divisor;

    let expired_periods = clamp_i32(input.vacation.expired_periods, 0, MAX_EXPIRED_PERIODS);
    let current_month = i32::from(input.vacation.count_current_month_if_at_least_15_days);
    let proportional_months = clamp_i32(
        clamp_i32(input.vacation.proportional_months, 0, MAX_PROPORTIONAL_MONTHS) + current_month,
        0,
        12,
    );

    let expired_amount = round_money(
        salary * Decimal::from(expired_periods) * (divisor + Decimal::ONE) / divisor,
    );

    let forfeited = input.category.forfeits_proportional_accruals();
    let proportional_amount = if forfeited {
        Decimal::ZERO
    } else {
        round_money(
            salary * Decimal::from(proportional_months) * (divisor + Decimal::ONE)
                / (Decimal::from(12) * divisor),
        )
    };

    let reasoning = format!(
        "Expired: {} x ${} x {} = ${}; proportional: {}",
        expired_periods,
        salary.normalize(),
        with_bonus.round_dp(4).normalize(),
        expired_amount.normalize(),
        if forfeited {
            format!("forfeited on {} termination", input.category.as_str())
        } else {
            format!(
                "${} x {}/12 x {} = ${}",
                salary.normalize(),
                proportional_months,
                with_bonus.round_dp(4).normalize(),
                proportional_amount.normalize()
            )
        }
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay".to_string(),
        legal_ref: VACATION_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "expired_periods": input.vacation.expired_periods,
            "proportional_months": input.vacation.proportional_months,
            "count_current_month": input.vacation.count_current_month_if_at_least_15_days,
            "category": input.category.as_str()
        }),
        output: serde_json::json!({
            "expired_periods": expired_periods,
            "proportional_months": proportional_months,
            "expired_amount": expired_amount.normalize().to_string(),
            "proportional_amount": proportional_amount.normalize().to_string(),
            "proportional_forfeited": forfeited
        }),
        reasoning,
    };

    VacationPayResult {
        expired_periods,
        proportional_months,
        expired_amount,
        proportional_amount,
        audit_step,
    }
}

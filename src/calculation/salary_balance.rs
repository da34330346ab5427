//! Accrued salary balance for the termination month.

use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::models::{AuditStep, SettlementInput};

use super::calendar::clamp_i32;
use super::money::daily_amount;

/// Legal reference for the salary balance.
pub const SALARY_BALANCE_REF: &str = "CLT art. 477";

/// The result of calculating the salary balance.
#[derive(Debug, Clone)]
pub struct SalaryBalanceResult {
    /// Days paid after clamping (0..=30).
    pub days: i32,
    /// The accrued salary balance.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays the days worked in the termination month at the daily rate.
///
/// The daily rate is always `monthly_salary / daily_divisor`, whatever the
/// actual length of the month.
pub fn calculate_salary_balance(
    input: &SettlementInput,
    rules: &SettlementRules,
    step_number: u32,
) -> SalaryBalanceResult {
    let salary = input.effective_salary();
    let days = clamp_i32(input.days_worked_in_termination_month, 0, 30);
    let amount = daily_amount(salary, Decimal::from(days), rules.daily_divisor);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_balance".to_string(),
        rule_name: "Salary Balance".to_string(),
        legal_ref: SALARY_BALANCE_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "days_worked": input.days_worked_in_termination_month
        }),
        output: serde_json::json!({
            "days_paid": days,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} x {} days = ${}",
            salary.normalize(),
            rules.daily_divisor,
            days,
            amount.normalize()
        ),
    };

    SalaryBalanceResult {
        days,
        amount,
        audit_step,
    }
}

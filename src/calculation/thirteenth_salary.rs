//! Proportional 13th salary calculation (Lei 4.090/1962).
//!
//! The 13th salary accrues one twelfth of the monthly salary for each
//! calendar month of the projection year in which at least 15 days were worked.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::SettlementRules;
use crate::models::{AuditStep, SettlementInput};

use super::calendar::months_with_min_days;
use super::money::round_money;

/// Legal reference for the 13th salary.
pub const THIRTEENTH_SALARY_REF: &str = "Lei 4.090/1962";

/// The result of prorating the 13th salary.
#[derive(Debug, Clone)]
pub struct ThirteenthSalaryResult {
    /// Months counted towards the 13th salary (0..=12).
    pub months: u32,
    /// The prorated amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional 13th salary up to the projected date.
///
/// Months are counted from the later of the hire date and January 1 of the
/// projected date's year. Dismissal for cause forfeits the 13th salary.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::calculate_thirteenth_salary;
/// use severance_engine::config::SettlementRules;
/// use severance_engine::models::{
///     NoticeElection, NoticeMode, SettlementInput, SeveranceFundElection, TerminationCategory,
///     VacationElection,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     monthly_salary: Decimal::from(2400),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
///     category: TerminationCategory::EmployerNoCause,
///     notice: NoticeElection { mode: NoticeMode::Worked, unfulfilled_days_on_resignation: 0 },
///     days_worked_in_termination_month: 20,
///     vacation: VacationElection {
///         expired_periods: 0,
///         proportional_months: 0,
///         count_current_month_if_at_least_15_days: false,
///     },
///     severance_fund: SeveranceFundElection { use_stated_balance: false, stated_balance: Decimal::ZERO },
/// };
///
/// let projected = input.termination_date;
/// let result = calculate_thirteenth_salary(&input, projected, &SettlementRules::statutory(), 1);
/// assert_eq!(result.months, 6);
/// assert_eq!(result.amount, Decimal::from(1200));
/// ```
pub fn calculate_thirteenth_salary(
    input: &SettlementInput,
    projected_date: NaiveDate,
    rules: &SettlementRules,
    step_number: u32,
) -> ThirteenthSalaryResult {
    let salary = input.effective_salary();
    let year_start =
        NaiveDate::from_ymd_opt(projected_date.year(), 1, 1).unwrap_or(projected_date);
    let count_from = input.hire_date.max(year_start);

    let forfeited = input.category.forfeits_proportional_accruals();
    let months = if forfeited {
        0
    } else {
        months_with_min_days(count_from, projected_date, rules.accrual.min_days_per_month)
    };

    let amount = round_money(salary * Decimal::from(months) / Decimal::from(12));

    let reasoning = if forfeited {
        format!(
            "No 13th salary on {} termination",
            input.category.as_str()
        )
    } else {
        format!(
            "{} months with {}+ days from {} to {}: ${} / 12 x {} = ${}",
            months,
            rules.accrual.min_days_per_month,
            count_from,
            projected_date,
            salary.normalize(),
            months,
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_salary".to_string(),
        rule_name: "13th Salary Proration".to_string(),
        legal_ref: THIRTEENTH_SALARY_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "count_from": count_from.to_string(),
            "projected_date": projected_date.to_string(),
            "category": input.category.as_str()
        }),
        output: serde_json::json!({
            "months": months,
            "amount": amount.normalize().to_string(),
            "forfeited": forfeited
        }),
        reasoning,
    };

    ThirteenthSalaryResult {
        months,
        amount,
        audit_step,
    }
}

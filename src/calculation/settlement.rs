//! Settlement pipeline.
//!
//! Runs every rule in order over a single [`SettlementInput`]: notice period,
//! projection, 13th salary, vacation, salary balance, notice settlement and the
//! severance fund, then assembles totals and advisories.

use tracing::debug;

use crate::config::SettlementRules;
use crate::models::{
    AuditStep, SettlementAmounts, SettlementInput, SettlementOutput, SettlementSummary,
};

use super::advisories::collect_advisories;
use super::notice_period::{project_termination_date, resolve_notice_period};
use super::notice_settlement::calculate_notice_settlement;
use super::salary_balance::calculate_salary_balance;
use super::severance_fund::calculate_severance_fund;
use super::thirteenth_salary::calculate_thirteenth_salary;
use super::vacation::calculate_vacation_pay;

/// A settlement together with the audit trail that produced it.
#[derive(Debug, Clone)]
pub struct SettlementCalculation {
    /// The settlement breakdown.
    pub output: SettlementOutput,
    /// One audit step per rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates a settlement under the given rules, recording every rule applied.
///
/// Never fails: out-of-range inputs are clamped, and reversed dates degrade to
/// zero-length accruals.
pub fn calculate_settlement(
    input: &SettlementInput,
    rules: &SettlementRules,
) -> SettlementCalculation {
    let notice = resolve_notice_period(input, &rules.notice, 1);
    let projection = project_termination_date(input, notice.notice_days, 2);
    let projected_date = projection.projected_date;

    let thirteenth = calculate_thirteenth_salary(input, projected_date, rules, 3);
    let vacation = calculate_vacation_pay(input, rules, 4);
    let balance = calculate_salary_balance(input, rules, 5);
    let notice_settlement = calculate_notice_settlement(input, &notice, rules, 6);
    let fund = calculate_severance_fund(input, projected_date, rules, 7);

    let total_before_fund_penalty = balance.amount
        + notice_settlement.payment
        + thirteenth.amount
        + vacation.expired_amount
        + vacation.proportional_amount
        - notice_settlement.deduction;
    let total_overall = total_before_fund_penalty + fund.penalty;

    let advisories = collect_advisories(input);

    debug!(
        category = %input.category,
        notice_days = notice.notice_days,
        projected_date = %projected_date,
        thirteenth_months = thirteenth.months,
        total_before_fund_penalty = %total_before_fund_penalty,
        total_overall = %total_overall,
        advisories = advisories.len(),
        "Settlement calculated"
    );

    let output = SettlementOutput {
        summary: SettlementSummary {
            notice_days: notice.notice_days,
            notice_factor: notice.notice_factor,
            projected_date,
            thirteenth_months: thirteenth.months,
            estimated_fund_months: fund.estimated_months,
            fund_withdrawal_percent: fund.withdrawal_percent,
            unemployment_insurance_eligibility: fund.unemployment_insurance,
        },
        amounts: SettlementAmounts {
            accrued_salary_balance: balance.amount,
            notice_payment: notice_settlement.payment,
            notice_deduction: notice_settlement.deduction,
            thirteenth_salary_proration: thirteenth.amount,
            expired_vacation_pay: vacation.expired_amount,
            proportional_vacation_pay: vacation.proportional_amount,
            fund_severance_penalty: fund.penalty,
            total_before_fund_penalty,
            total_overall,
        },
        advisories: advisories.iter().map(ToString::to_string).collect(),
    };

    SettlementCalculation {
        output,
        audit_steps: vec![
            notice.audit_step,
            projection.audit_step,
            thirteenth.audit_step,
            vacation.audit_step,
            balance.audit_step,
            notice_settlement.audit_step,
            fund.audit_step,
        ],
    }
}

/// Computes a settlement under the statutory rules.
///
/// A pure function: equal inputs always produce equal outputs.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::compute;
/// use severance_engine::models::{
///     NoticeElection, NoticeMode, SettlementInput, SeveranceFundElection, TerminationCategory,
///     VacationElection,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     monthly_salary: Decimal::from(3000),
///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     category: TerminationCategory::EmployerNoCause,
///     notice: NoticeElection { mode: NoticeMode::PaidInLieu, unfulfilled_days_on_resignation: 0 },
///     days_worked_in_termination_month: 1,
///     vacation: VacationElection {
///         expired_periods: 1,
///         proportional_months: 0,
///         count_current_month_if_at_least_15_days: false,
///     },
///     severance_fund: SeveranceFundElection { use_stated_balance: false, stated_balance: Decimal::ZERO },
/// };
///
/// let output = compute(&input);
/// assert_eq!(output.summary.notice_days, 30);
/// assert_eq!(output.amounts.expired_vacation_pay, Decimal::from(4000));
/// assert_eq!(
///     output.amounts.total_overall - output.amounts.total_before_fund_penalty,
///     output.amounts.fund_severance_penalty
/// );
/// ```
pub fn compute(input: &SettlementInput) -> SettlementOutput {
    calculate_settlement(input, &SettlementRules::statutory()).output
}

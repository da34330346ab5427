//! Settlement output model.
//!
//! The [`SettlementOutput`] is produced once per calculation and is a pure
//! function of the [`SettlementInput`](super::SettlementInput): two calls with
//! equal inputs yield equal outputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::UnemploymentInsurance;

/// The non-monetary facts derived during the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// The notice period length in days.
    pub notice_days: i64,
    /// Scaling applied to the indemnified notice payment (1 or 0.5).
    pub notice_factor: Decimal,
    /// The date proportional accruals are anchored to.
    pub projected_date: NaiveDate,
    /// Months counted towards the 13th salary (0..=12).
    pub thirteenth_months: u32,
    /// Months used to estimate the severance-fund balance.
    pub estimated_fund_months: i64,
    /// Share of the fund the employee may withdraw (0, 80 or 100).
    pub fund_withdrawal_percent: u8,
    /// Unemployment insurance eligibility.
    pub unemployment_insurance_eligibility: UnemploymentInsurance,
}

/// The monetary breakdown of the settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementAmounts {
    /// Salary for days worked in the termination month.
    pub accrued_salary_balance: Decimal,
    /// Indemnified notice receivable by the employee.
    pub notice_payment: Decimal,
    /// Unfulfilled resignation notice payable by the employee.
    pub notice_deduction: Decimal,
    /// Proportional 13th salary.
    pub thirteenth_salary_proration: Decimal,
    /// Expired vacation periods including the one-third bonus.
    pub expired_vacation_pay: Decimal,
    /// Proportional vacation including the one-third bonus.
    pub proportional_vacation_pay: Decimal,
    /// Penalty deposited into the severance-fund account.
    pub fund_severance_penalty: Decimal,
    /// Everything settled directly, excluding the fund penalty.
    pub total_before_fund_penalty: Decimal,
    /// `total_before_fund_penalty` plus the fund penalty.
    pub total_overall: Decimal,
}

/// The complete result of a settlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementOutput {
    /// Derived dates, counts and eligibility.
    pub summary: SettlementSummary,
    /// Monetary breakdown.
    pub amounts: SettlementAmounts,
    /// Human-readable notes, in a fixed order.
    pub advisories: Vec<String>,
}

//! Settlement input model.
//!
//! A [`SettlementInput`] is constructed once per calculation by the caller.
//! Numeric fields are wide (`i32`, unrestricted `Decimal`) so that out-of-range
//! values can reach the engine and be clamped there.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NoticeMode, TerminationCategory};

/// Ceiling for monetary inputs (10^15).
///
/// Salaries and stated balances above it are clamped by the engine and
/// rejected at the HTTP boundary. Every component stays far inside the
/// `Decimal` range at this magnitude, even over the longest tenures.
pub const MAX_MONEY_INPUT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// The notice arrangement elected for the termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeElection {
    /// How the notice period is fulfilled.
    pub mode: NoticeMode,
    /// Notice days the employee did not work on resignation (0..=30).
    #[serde(default)]
    pub unfulfilled_days_on_resignation: i32,
}

/// The vacation accrual state at termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationElection {
    /// Fully accrued, unused vacation periods (0..=2).
    #[serde(default)]
    pub expired_periods: i32,
    /// Months accrued since the last anniversary (0..=11).
    #[serde(default)]
    pub proportional_months: i32,
    /// Counts the current month when it reached 15 days.
    #[serde(default)]
    pub count_current_month_if_at_least_15_days: bool,
}

/// How the severance-fund balance used as the penalty base is obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceFundElection {
    /// Use `stated_balance` instead of estimating from salary.
    pub use_stated_balance: bool,
    /// The account balance stated by the employee.
    #[serde(default)]
    pub stated_balance: Decimal,
}

/// The complete input to a settlement calculation.
///
/// # Example
///
/// ```
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
///     notice: NoticeElection {
///         mode: NoticeMode::PaidInLieu,
///         unfulfilled_days_on_resignation: 0,
///     },
///     days_worked_in_termination_month: 1,
///     vacation: VacationElection {
///         expired_periods: 1,
///         proportional_months: 0,
///         count_current_month_if_at_least_15_days: false,
///     },
///     severance_fund: SeveranceFundElection {
///         use_stated_balance: false,
///         stated_balance: Decimal::ZERO,
///     },
/// };
/// assert_eq!(input.category, TerminationCategory::EmployerNoCause);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// The monthly salary.
    pub monthly_salary: Decimal,
    /// The first day of employment.
    pub hire_date: NaiveDate,
    /// The official last day of employment.
    pub termination_date: NaiveDate,
    /// The termination category.
    pub category: TerminationCategory,
    /// The notice arrangement.
    pub notice: NoticeElection,
    /// Days worked in the month of termination (0..=30).
    #[serde(default)]
    pub days_worked_in_termination_month: i32,
    /// Vacation accrual state.
    pub vacation: VacationElection,
    /// Severance-fund balance handling.
    pub severance_fund: SeveranceFundElection,
}

impl SettlementInput {
    /// Returns the monthly salary, clamped to `0..=MAX_MONEY_INPUT`.
    pub fn effective_salary(&self) -> Decimal {
        self.monthly_salary.clamp(Decimal::ZERO, MAX_MONEY_INPUT)
    }

    /// Returns the stated fund balance, clamped to `0..=MAX_MONEY_INPUT`.
    pub fn effective_stated_balance(&self) -> Decimal {
        self.severance_fund.stated_balance.clamp(Decimal::ZERO, MAX_MONEY_INPUT)
    }
}

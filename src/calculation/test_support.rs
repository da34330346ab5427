//! Shared fixtures for calculation unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{
    NoticeElection, NoticeMode, SettlementInput, SeveranceFundElection, TerminationCategory,
    VacationElection,
};

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Salary 3000, hired 2023-01-01, terminated 2024-01-01 with notice paid in
/// lieu, one day worked, one expired vacation period and an estimated fund.
pub(crate) fn base_input(category: TerminationCategory) -> SettlementInput {
    SettlementInput {
        monthly_salary: dec("3000"),
        hire_date: date("2023-01-01"),
        termination_date: date("2024-01-01"),
        category,
        notice: NoticeElection {
            mode: NoticeMode::PaidInLieu,
            unfulfilled_days_on_resignation: 0,
        },
        days_worked_in_termination_month: 1,
        vacation: VacationElection {
            expired_periods: 1,
            proportional_months: 0,
            count_current_month_if_at_least_15_days: false,
        },
        severance_fund: SeveranceFundElection {
            use_stated_balance: false,
            stated_balance: Decimal::ZERO,
        },
    }
}

//! Request types for the Severance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint and the validation applied before a request reaches the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    MAX_MONEY_INPUT, NoticeElection, NoticeMode, SettlementInput, SeveranceFundElection,
    TerminationCategory, VacationElection,
};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The monthly salary.
    pub monthly_salary: Decimal,
    /// The first day of employment.
    pub hire_date: NaiveDate,
    /// The official last day of employment.
    pub termination_date: NaiveDate,
    /// The termination category.
    pub category: TerminationCategory,
    /// The notice arrangement.
    pub notice: NoticeRequest,
    /// Days worked in the month of termination.
    #[serde(default)]
    pub days_worked_in_termination_month: i32,
    /// Vacation accrual state.
    #[serde(default)]
    pub vacation: VacationRequest,
    /// Severance-fund balance handling.
    pub severance_fund: SeveranceFundRequest,
}

/// Notice arrangement in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeRequest {
    /// How the notice period is fulfilled.
    pub mode: NoticeMode,
    /// Notice days not worked on resignation.
    #[serde(default)]
    pub unfulfilled_days_on_resignation: i32,
}

/// Vacation accrual state in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Fully accrued, unused vacation periods.
    #[serde(default)]
    pub expired_periods: i32,
    /// Months accrued since the last anniversary.
    #[serde(default)]
    pub proportional_months: i32,
    /// Counts the current month when it reached 15 days.
    #[serde(default)]
    pub count_current_month_if_at_least_15_days: bool,
}

/// Severance-fund handling in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceFundRequest {
    /// Use `stated_balance` instead of estimating from salary.
    pub use_stated_balance: bool,
    /// The account balance stated by the employee.
    #[serde(default)]
    pub stated_balance: Decimal,
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_range(field: &str, value: i32, min: i32, max: i32) -> EngineResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            &format!("must be between {} and {}, got {}", min, max, value),
        ))
    }
}

fn check_money(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() {
        return Err(invalid(field, "must not be negative"));
    }
    if value > MAX_MONEY_INPUT {
        return Err(invalid(field, &format!("must not exceed {}", MAX_MONEY_INPUT)));
    }
    Ok(())
}

impl SettlementRequest {
    /// Validates field ranges and date ordering.
    pub fn validate(&self) -> EngineResult<()> {
        check_money("monthly_salary", self.monthly_salary)?;
        check_money("severance_fund.stated_balance", self.severance_fund.stated_balance)?;
        if self.termination_date < self.hire_date {
            return Err(invalid("termination_date", "must not be before hire_date"));
        }

        check_range(
            "notice.unfulfilled_days_on_resignation",
            self.notice.unfulfilled_days_on_resignation,
            0,
            30,
        )?;
        check_range(
            "days_worked_in_termination_month",
            self.days_worked_in_termination_month,
            0,
            30,
        )?;
        check_range("vacation.expired_periods", self.vacation.expired_periods, 0, 2)?;
        check_range(
            "vacation.proportional_months",
            self.vacation.proportional_months,
            0,
            11,
        )?;

        Ok(())
    }

    /// Returns the notice mode after category-level adjustments.
    ///
    /// Dismissal for cause has no notice. A resignation cannot have "no notice";
    /// it is treated as worked and any shortfall goes through the unfulfilled
    /// days deduction.
    pub fn effective_notice_mode(&self) -> NoticeMode {
        match (self.category, self.notice.mode) {
            (TerminationCategory::EmployerForCause, _) => NoticeMode::None,
            (TerminationCategory::EmployeeResignation, NoticeMode::None) => NoticeMode::Worked,
            (_, mode) => mode,
        }
    }
}

impl TryFrom<SettlementRequest> for SettlementInput {
    type Error = EngineError;

    fn try_from(req: SettlementRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        let mode = req.effective_notice_mode();

        Ok(SettlementInput {
            monthly_salary: req.monthly_salary,
            hire_date: req.hire_date,
            termination_date: req.termination_date,
            category: req.category,
            notice: NoticeElection {
                mode,
                unfulfilled_days_on_resignation: req.notice.unfulfilled_days_on_resignation,
            },
            days_worked_in_termination_month: req.days_worked_in_termination_month,
            vacation: VacationElection {
                expired_periods: req.vacation.expired_periods,
                proportional_months: req.vacation.proportional_months,
                count_current_month_if_at_least_15_days: req
                    .vacation
                    .count_current_month_if_at_least_15_days,
            },
            severance_fund: SeveranceFundElection {
                use_stated_balance: req.severance_fund.use_stated_balance,
                stated_balance: req.severance_fund.stated_balance,
            },
        })
    }
}

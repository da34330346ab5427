//! Calculation logic for the Severance Engine.
//!
//! This module contains the calendar arithmetic helpers, the notice period and
//! projection rules, the proportional accrual rules (13th salary, vacation), the
//! monetary components (salary balance, notice payment and deduction,
//! severance-fund penalty) and the pipeline that assembles them into a
//! settlement with totals and advisories.

mod advisories;
mod calendar;
mod money;
mod notice_period;
mod notice_settlement;
mod salary_balance;
mod settlement;
mod severance_fund;
mod thirteenth_salary;
mod vacation;

#[cfg(test)]
mod test_support;

pub use advisories::{Advisory, collect_advisories};
pub use calendar::{
    add_days, complete_years_between, days_inclusive, months_touched,
    months_with_at_least_15_days, months_with_min_days,
};
pub use money::{MONEY_SCALE, daily_amount, round_money};
pub use notice_period::{
    NOTICE_PERIOD_REF, NOTICE_PROJECTION_REF, NoticePeriodResult, ProjectionResult,
    project_termination_date, proportional_notice_days, resolve_notice_period,
};
pub use notice_settlement::{
    NOTICE_SETTLEMENT_REF, NoticeSettlementResult, calculate_notice_settlement,
};
pub use salary_balance::{SALARY_BALANCE_REF, SalaryBalanceResult, calculate_salary_balance};
pub use settlement::{SettlementCalculation, calculate_settlement, compute};
pub use severance_fund::{
    FundOutcome, SEVERANCE_FUND_REF, SeveranceFundResult, calculate_severance_fund, fund_outcome,
};
pub use thirteenth_salary::{
    THIRTEENTH_SALARY_REF, ThirteenthSalaryResult, calculate_thirteenth_salary,
};
pub use vacation::{
    MAX_EXPIRED_PERIODS, MAX_PROPORTIONAL_MONTHS, VACATION_REF, VacationPayResult,
    calculate_vacation_pay,
};

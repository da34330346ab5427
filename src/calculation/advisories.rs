//! Advisory notes attached to a settlement.
//!
//! Advisories explain estimates and category rules that materially change the
//! result. All applicable advisories are included, always in declaration order.

use crate::models::{SettlementInput, TerminationCategory};

/// A note explaining part of the settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Advisory {
    /// The fund balance was estimated from salary rather than stated.
    EstimatedFundBalance,
    /// The resignation includes a deduction for unfulfilled notice.
    ResignationNoticeDeduction,
    /// Mutual agreement halves notice and fund penalty and excludes insurance.
    MutualAgreementHalved,
    /// Dismissal for cause forfeits 13th salary and proportional vacation.
    ForCauseExclusions,
}

impl Advisory {
    /// Returns a stable code for the advisory.
    pub fn code(self) -> &'static str {
        match self {
            Advisory::EstimatedFundBalance => "ESTIMATED_FUND_BALANCE",
            Advisory::ResignationNoticeDeduction => "RESIGNATION_NOTICE_DEDUCTION",
            Advisory::MutualAgreementHalved => "MUTUAL_AGREEMENT_HALVED",
            Advisory::ForCauseExclusions => "FOR_CAUSE_EXCLUSIONS",
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Advisory::EstimatedFundBalance => {
                "Severance fund: the balance was estimated at 8% of the salary per month. \
                 If the salary changed or there were leaves of absence, the actual amount may differ."
            }
            Advisory::ResignationNoticeDeduction => {
                "Resignation: this result includes a deduction for the unfulfilled notice period \
                 (CLT art. 487, §2º)."
            }
            Advisory::MutualAgreementHalved => {
                "Mutual agreement (CLT art. 484-A): the fund penalty and indemnified notice are \
                 paid by half, and there is no unemployment insurance."
            }
            Advisory::ForCauseExclusions => {
                "Dismissal for cause: there is ordinarily no proportional 13th salary or \
                 proportional vacation (expired vacation remains owed)."
            }
        };
        f.write_str(message)
    }
}

/// Collects the advisories that apply to a settlement, in fixed order.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::{collect_advisories, Advisory};
/// use severance_engine::models::{
///     NoticeElection, NoticeMode, SettlementInput, SeveranceFundElection, TerminationCategory,
///     VacationElection,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     monthly_salary: Decimal::from(2000),
///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     category: TerminationCategory::MutualAgreement,
///     notice: NoticeElection { mode: NoticeMode::PaidInLieu, unfulfilled_days_on_resignation: 0 },
///     days_worked_in_termination_month: 0,
///     vacation: VacationElection {
///         expired_periods: 0,
///         proportional_months: 0,
///         count_current_month_if_at_least_15_days: false,
///     },
///     severance_fund: SeveranceFundElection { use_stated_balance: true, stated_balance: Decimal::ZERO },
/// };
///
/// assert_eq!(collect_advisories(&input), vec![Advisory::MutualAgreementHalved]);
/// ```
pub fn collect_advisories(input: &SettlementInput) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if !input.severance_fund.use_stated_balance {
        advisories.push(Advisory::EstimatedFundBalance);
    }

    match input.category {
        TerminationCategory::EmployeeResignation => {
            if input.notice.unfulfilled_days_on_resignation > 0 {
                advisories.push(Advisory::ResignationNoticeDeduction);
            }
        }
        TerminationCategory::MutualAgreement => advisories.push(Advisory::MutualAgreementHalved),
        TerminationCategory::EmployerForCause => advisories.push(Advisory::ForCauseExclusions),
        TerminationCategory::EmployerNoCause | TerminationCategory::ConstructiveDismissal => {}
    }

    advisories
}

//! Termination category and notice arrangement types.
//!
//! Every category-dependent rule in the engine is expressed as an exhaustive
//! `match` on [`TerminationCategory`], so adding a category forces each rule
//! to be revisited.

use serde::{Deserialize, Serialize};

/// The legal category of an employment termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationCategory {
    /// Dismissal by the employer without just cause.
    EmployerNoCause,
    /// Resignation requested by the employee.
    EmployeeResignation,
    /// Dismissal by the employer for just cause.
    EmployerForCause,
    /// Termination by mutual agreement (CLT art. 484-A).
    MutualAgreement,
    /// Termination by the employee due to employer misconduct.
    ConstructiveDismissal,
}

/// How the notice period length is determined for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEntitlement {
    /// Base days plus extra days per full year of service, capped.
    Proportional,
    /// The fixed resignation notice.
    Resignation,
    /// No notice period applies.
    None,
}

impl TerminationCategory {
    /// Returns how the notice period is sized for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::{NoticeEntitlement, TerminationCategory};
    ///
    /// assert_eq!(
    ///     TerminationCategory::MutualAgreement.notice_entitlement(),
    ///     NoticeEntitlement::Proportional
    /// );
    /// assert_eq!(
    ///     TerminationCategory::EmployerForCause.notice_entitlement(),
    ///     NoticeEntitlement::None
    /// );
    /// ```
    pub fn notice_entitlement(self) -> NoticeEntitlement {
        match self {
            TerminationCategory::EmployerNoCause
            | TerminationCategory::ConstructiveDismissal
            | TerminationCategory::MutualAgreement => NoticeEntitlement::Proportional,
            TerminationCategory::EmployeeResignation => NoticeEntitlement::Resignation,
            TerminationCategory::EmployerForCause => NoticeEntitlement::None,
        }
    }

    /// Returns true if the employee receives payment for indemnified notice.
    pub fn receives_indemnified_notice(self) -> bool {
        match self {
            TerminationCategory::EmployerNoCause
            | TerminationCategory::ConstructiveDismissal
            | TerminationCategory::MutualAgreement => true,
            TerminationCategory::EmployeeResignation | TerminationCategory::EmployerForCause => {
                false
            }
        }
    }

    /// Returns true if the employee owes unfulfilled notice back to the employer.
    pub fn owes_unfulfilled_notice(self) -> bool {
        match self {
            TerminationCategory::EmployeeResignation => true,
            TerminationCategory::EmployerNoCause
            | TerminationCategory::EmployerForCause
            | TerminationCategory::MutualAgreement
            | TerminationCategory::ConstructiveDismissal => false,
        }
    }

    /// Returns true if the 13th salary and proportional vacation are forfeited.
    pub fn forfeits_proportional_accruals(self) -> bool {
        match self {
            TerminationCategory::EmployerForCause => true,
            TerminationCategory::EmployerNoCause
            | TerminationCategory::EmployeeResignation
            | TerminationCategory::MutualAgreement
            | TerminationCategory::ConstructiveDismissal => false,
        }
    }

    /// Returns the snake_case identifier used in audit records.
    pub fn as_str(self) -> &'static str {
        match self {
            TerminationCategory::EmployerNoCause => "employer_no_cause",
            TerminationCategory::EmployeeResignation => "employee_resignation",
            TerminationCategory::EmployerForCause => "employer_for_cause",
            TerminationCategory::MutualAgreement => "mutual_agreement",
            TerminationCategory::ConstructiveDismissal => "constructive_dismissal",
        }
    }
}

impl std::fmt::Display for TerminationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the notice period is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeMode {
    /// The employee works through the notice period.
    Worked,
    /// The notice period is paid in lieu and projects the termination date.
    PaidInLieu,
    /// There is no notice period.
    None,
}

impl NoticeMode {
    /// Returns the snake_case identifier used in audit records.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeMode::Worked => "worked",
            NoticeMode::PaidInLieu => "paid_in_lieu",
            NoticeMode::None => "none",
        }
    }
}

/// Whether the employee may claim unemployment insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnemploymentInsurance {
    /// Eligible.
    Yes,
    /// Not eligible.
    No,
    /// Eligibility depends on facts outside the calculation.
    Depends,
}

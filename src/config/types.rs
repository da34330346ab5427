//! Configuration types for the statutory settlement rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the labor regime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegimeMetadata {
    /// Short code for the regime (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the consolidated statute.
    pub source_url: String,
}

/// Notice period rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRules {
    /// Notice days granted regardless of tenure.
    pub base_days: i64,
    /// Extra days for each full year of service beyond the first.
    pub extra_days_per_year: i64,
    /// Upper bound on the notice period.
    pub max_days: i64,
    /// Fixed notice period on resignation.
    pub resignation_days: i64,
    /// Share of indemnified notice paid under mutual agreement.
    pub mutual_agreement_factor: Decimal,
}

/// Proportional accrual rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRules {
    /// Days a calendar month needs to count as a full month.
    pub min_days_per_month: i64,
}

/// Vacation pay rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRules {
    /// The constitutional vacation bonus is `1 / bonus_divisor` of the pay.
    pub bonus_divisor: u32,
}

/// Severance-fund rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceFundRules {
    /// Monthly employer deposit as a share of salary.
    pub monthly_deposit_rate: Decimal,
    /// Penalty on dismissal without cause or constructive dismissal.
    pub dismissal_penalty_rate: Decimal,
    /// Penalty under mutual agreement.
    pub mutual_agreement_penalty_rate: Decimal,
}

/// The full set of numeric rules used by the settlement calculation.
///
/// # Example
///
/// ```
/// use severance_engine::config::SettlementRules;
///
/// let rules = SettlementRules::statutory();
/// assert_eq!(rules.notice.max_days, 90);
/// assert_eq!(rules.daily_divisor, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRules {
    /// Divisor turning a monthly salary into a daily rate.
    pub daily_divisor: u32,
    /// Notice period rules.
    pub notice: NoticeRules,
    /// Proportional accrual rules.
    pub accrual: AccrualRules,
    /// Vacation pay rules.
    pub vacation: VacationRules,
    /// Severance-fund rules.
    pub severance_fund: SeveranceFundRules,
}

impl SettlementRules {
    /// Returns the statutory CLT rule set.
    ///
    /// These values match the shipped `config/clt/rules.yaml`.
    pub fn statutory() -> Self {
        Self {
            daily_divisor: 30,
            notice: NoticeRules {
                base_days: 30,
                extra_days_per_year: 3,
                max_days: 90,
                resignation_days: 30,
                mutual_agreement_factor: Decimal::new(5, 1),
            },
            accrual: AccrualRules {
                min_days_per_month: 15,
            },
            vacation: VacationRules { bonus_divisor: 3 },
            severance_fund: SeveranceFundRules {
                monthly_deposit_rate: Decimal::new(8, 2),
                dismissal_penalty_rate: Decimal::new(40, 2),
                mutual_agreement_penalty_rate: Decimal::new(20, 2),
            },
        }
    }
}

impl Default for SettlementRules {
    fn default() -> Self {
        Self::statutory()
    }
}

/// The complete regime configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RegimeConfig {
    metadata: RegimeMetadata,
    rules: SettlementRules,
}

impl RegimeConfig {
    /// Creates a new RegimeConfig from its component parts.
    pub fn new(metadata: RegimeMetadata, rules: SettlementRules) -> Self {
        Self { metadata, rules }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns the settlement rules.
    pub fn rules(&self) -> &SettlementRules {
        &self.rules
    }
}

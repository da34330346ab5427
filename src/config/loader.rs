//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! settlement rules from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RegimeConfig, RegimeMetadata, SettlementRules};

/// Loads and provides access to a labor regime configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt/
/// ├── regime.yaml   # Regime metadata
/// └── rules.yaml    # Notice, accrual, vacation and fund rules
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt")?;
/// println!("Notice cap: {} days", loader.rules().notice.max_days);
/// # Ok::<(), severance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RegimeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rule value is inconsistent (see [`ConfigLoader::validate_rules`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let rules = Self::load_yaml::<SettlementRules>(&path.join("rules.yaml"))?;
        Self::validate_rules(&rules)?;

        Ok(Self {
            config: RegimeConfig::new(metadata, rules),
        })
    }

    /// Creates a loader around an in-memory configuration.
    pub fn from_config(config: RegimeConfig) -> EngineResult<Self> {
        Self::validate_rules(config.rules())?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks that rule values are internally consistent.
    ///
    /// Rejects zero divisors, a notice cap below the base, negative day counts
    /// or rates, and a mutual-agreement factor outside `(0, 1]`.
    pub fn validate_rules(rules: &SettlementRules) -> EngineResult<()> {
        fn invalid(rule: &str, message: &str) -> EngineError {
            EngineError::InvalidRule {
                rule: rule.to_string(),
                message: message.to_string(),
            }
        }

        if rules.daily_divisor == 0 {
            return Err(invalid("daily_divisor", "must be greater than zero"));
        }
        if rules.vacation.bonus_divisor == 0 {
            return Err(invalid("vacation.bonus_divisor", "must be greater than zero"));
        }

        let notice = &rules.notice;
        if notice.base_days < 0 || notice.extra_days_per_year < 0 || notice.resignation_days < 0
        {
            return Err(invalid("notice", "day counts must not be negative"));
        }
        if notice.max_days < notice.base_days {
            return Err(invalid(
                "notice.max_days",
                "must not be below notice.base_days",
            ));
        }
        if notice.mutual_agreement_factor <= Decimal::ZERO
            || notice.mutual_agreement_factor > Decimal::ONE
        {
            return Err(invalid(
                "notice.mutual_agreement_factor",
                "must be greater than 0 and at most 1",
            ));
        }

        if !(1..=31).contains(&rules.accrual.min_days_per_month) {
            return Err(invalid(
                "accrual.min_days_per_month",
                "must be between 1 and 31",
            ));
        }

        let fund = &rules.severance_fund;
        for (rule, rate) in [
            ("severance_fund.monthly_deposit_rate", fund.monthly_deposit_rate),
            ("severance_fund.dismissal_penalty_rate", fund.dismissal_penalty_rate),
            (
                "severance_fund.mutual_agreement_penalty_rate",
                fund.mutual_agreement_penalty_rate,
            ),
        ] {
            if rate.is_sign_negative() {
                return Err(invalid(rule, "must not be negative"));
            }
        }

        Ok(())
    }

    /// Returns the underlying regime configuration.
    pub fn config(&self) -> &RegimeConfig {
        &self.config
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }

    /// Returns the settlement rules.
    pub fn rules(&self) -> &SettlementRules {
        self.config.rules()
    }
}

//! Configuration loading and management for the Severance Engine.
//!
//! This module loads the statutory rule tables of a labor regime from YAML
//! files: notice period lengths, the daily divisor, the 15-day accrual
//! threshold, the vacation bonus and the severance-fund rates.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualRules, NoticeRules, RegimeConfig, RegimeMetadata, SettlementRules,
    SeveranceFundRules, VacationRules,
};

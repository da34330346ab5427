//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod settlement_input;
mod settlement_output;
mod termination;

pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use settlement_input::{
    MAX_MONEY_INPUT, NoticeElection, SettlementInput, SeveranceFundElection, VacationElection,
};
pub use settlement_output::{SettlementAmounts, SettlementOutput, SettlementSummary};
pub use termination::{NoticeEntitlement, NoticeMode, TerminationCategory, UnemploymentInsurance};

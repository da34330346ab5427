//! Calculation result models for the Severance Engine.
//!
//! This module contains the [`CalculationResult`] envelope returned by the HTTP
//! API and the audit types that record every rule applied while producing a
//! [`SettlementOutput`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SettlementOutput;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or article the rule is based on.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use severance_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The envelope returned for a calculation request.
///
/// Wraps the deterministic [`SettlementOutput`] with request metadata and the
/// audit trace. Only `settlement` is a function of the input; the identifier,
/// timestamp and duration differ between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The code of the labor regime the rules were loaded for.
    pub regime_code: String,
    /// The settlement breakdown.
    pub settlement: SettlementOutput,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

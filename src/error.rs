//! Error types for the Severance Engine.
//!
//! The settlement calculation itself is infallible: out-of-range inputs are
//! clamped, never rejected. Errors only arise while loading the statutory
//! rule tables and while validating requests at the HTTP boundary.

use thiserror::Error;

/// The main error type for the Severance Engine.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A statutory rule value in the configuration is inconsistent.
    #[error("Invalid rule '{rule}': {message}")]
    InvalidRule {
        /// The dotted name of the offending rule (e.g. "notice.max_days").
        rule: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A settlement request field failed validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

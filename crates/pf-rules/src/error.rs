//! Error types for the rules engine.

use pf_core::CoreError;

/// Errors that can occur while validating engine input.
///
/// The engine itself is fail-soft: callers that take raw input turn these
/// into a no-op and a log line rather than surfacing them.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A generation parameter was malformed or out of range.
    #[error("invalid {name} \"{value}\": {reason}")]
    InvalidParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected raw value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A data-model error, such as a rejected stat edit.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;

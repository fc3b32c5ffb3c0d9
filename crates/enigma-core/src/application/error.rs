//! Application layer errors.
//!
//! These errors represent adapter failures, not business rules. Business
//! rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The output sink rejected a line.
    #[error("Failed to write output: {reason}")]
    SinkWrite { reason: String },

    /// Looking up a tool failed for a reason other than "not found".
    #[error("Failed to locate '{tool}': {reason}")]
    ToolLookup { tool: String, reason: String },

    /// A shared adapter's lock was poisoned by a panicking writer.
    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SinkWrite { .. } => vec![
                "Check that standard output is still open".into(),
                "If output is piped, make sure the reader did not exit early".into(),
            ],
            Self::ToolLookup { tool, .. } => vec![
                format!("Check that '{}' is readable on your PATH", tool),
                "Inspect PATH with: echo $PATH".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}

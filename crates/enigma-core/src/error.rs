//! Unified error handling for Enigma Core.
//!
//! Wraps domain and application errors in a single root type carrying
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Enigma Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnigmaError {
    /// Errors from the domain layer (malformed records, bad values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (adapter failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl EnigmaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input: the caller can fix it.
    Validation,
    /// Adapter failures and anything else the caller cannot fix.
    Internal,
}

/// Convenient result type alias.
pub type EnigmaResult<T> = Result<T, EnigmaError>;

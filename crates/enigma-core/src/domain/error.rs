use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Record parsing
    // ========================================================================
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Field '{field}' holds {found}; only strings and integers are supported")]
    UnsupportedValue { field: String, found: &'static str },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Indent width {width} is out of range (0..={max})")]
    InvalidIndent { width: usize, max: usize },

    #[error("Failed to serialise record: {reason}")]
    Serialization { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidJson { .. } | Self::NotAnObject { .. } => vec![
                "Records must be a single JSON object, e.g. {\"name\": \"Enigma\"}".into(),
            ],
            Self::UnsupportedValue { field, .. } => vec![
                format!("Change '{}' to a string or an integer", field),
                "Nested objects, arrays, floats, booleans and null are not supported".into(),
            ],
            Self::InvalidIndent { max, .. } => vec![
                format!("Use an indent between 0 and {}", max),
                "An indent of 0 prints compact JSON".into(),
            ],
            Self::Serialization { .. } => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Serialization { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

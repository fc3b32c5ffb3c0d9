//! The single business rule: a message must not be empty.

use std::fmt;

/// Outcome of validating a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Empty,
}

impl Verdict {
    /// Judge a message. Only the empty string is rejected; whitespace counts
    /// as content.
    pub fn of(info: &str) -> Self {
        if info.is_empty() {
            Self::Empty
        } else {
            Self::Accepted
        }
    }

    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The diagnostic line emitted after validation.
    pub fn describe(self, info: &str) -> String {
        match self {
            Self::Accepted => format!("Helper function called with info: {info}"),
            Self::Empty => "Helper function received empty info.".to_owned(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Accepted => "accepted",
            Self::Empty => "empty",
        })
    }
}

/// The line emitted before a message is validated.
pub fn processing_line(message: &str) -> String {
    format!("Doing something with message: {message}")
}

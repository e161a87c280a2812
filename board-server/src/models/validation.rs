//! Validation error types

use std::fmt;

/// Validation error for post drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or blank
    Empty { field: &'static str },

    /// Request body could not be bound to a draft
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

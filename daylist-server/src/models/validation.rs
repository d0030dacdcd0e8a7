//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't match the required format
    InvalidFormat {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat {
                field,
                value,
                reason,
            } => write!(f, "invalid {} '{}': {}", field, value, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

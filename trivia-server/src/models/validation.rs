//! Validation error types

use std::fmt;

/// Validation error for incoming question payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field absent or null
    Missing { field: &'static str },

    /// Field must be numeric (an integer, or a string holding one)
    NotNumeric { field: &'static str, value: String },

    /// Field has a JSON type we don't accept
    InvalidType { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotNumeric { field, value } => {
                write!(f, "{} must be numeric, got '{}'", field, value)
            }
            Self::InvalidType { field } => write!(f, "unexpected type for {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

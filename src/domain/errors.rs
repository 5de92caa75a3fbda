//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The handle kind tag is neither `phone` nor `email`.
    InvalidHandleKind(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandleKind(kind) => write!(f, "Invalid handle kind: {}", kind),
        }
    }
}

impl std::error::Error for ValidationError {}

//! HandleKind value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which union arm a handle row came from.
///
/// The SQL layer tags each row with the literal `'phone'` or `'email'`; this
/// type is the parsed form of that tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    Phone,
    Email,
}

impl HandleKind {
    /// The tag used inside query text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl FromStr for HandleKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            other => Err(ValidationError::InvalidHandleKind(other.to_string())),
        }
    }
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("phone".parse::<HandleKind>().unwrap(), HandleKind::Phone);
        assert_eq!("email".parse::<HandleKind>().unwrap(), HandleKind::Email);
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        let err = "fax".parse::<HandleKind>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidHandleKind("fax".to_string()));
        assert_eq!(err.to_string(), "Invalid handle kind: fax");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&HandleKind::Email).unwrap();
        assert_eq!(json, "\"email\"");
    }
}

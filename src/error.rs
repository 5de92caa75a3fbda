//! Error types for the Contacts MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by a single contact source while counting or fetching.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The underlying SQLite query failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The source could not be used (poisoned connection lock, bad row data)
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur during search operations.
///
/// `Failed` is the single shape the orchestrator surfaces for anything that
/// went wrong inside discovery, aggregation or normalization.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid search parameters
    #[error("Invalid search parameters: {0}")]
    InvalidParameters(String),

    /// The caller cancelled the search between sources
    #[error("Contact search cancelled")]
    Cancelled,

    /// Search execution failed
    #[error("Contact search failed: {0}")]
    Failed(String),
}

/// Convenience type alias for Results with SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingVar("HOME".to_string());
        assert_eq!(err.to_string(), "Missing required environment variable: HOME");

        let err = SearchError::Failed("disk I/O error".to_string());
        assert_eq!(err.to_string(), "Contact search failed: disk I/O error");

        let err = SearchError::Cancelled;
        assert_eq!(err.to_string(), "Contact search cancelled");
    }

    #[test]
    fn test_source_error_from_sqlite() {
        let err: SourceError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.to_string().starts_with("SQLite error:"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACTS_MAX_LIMIT".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("CONTACTS_MAX_LIMIT"));
        assert!(err.to_string().contains("positive number"));
    }
}

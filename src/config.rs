//! Configuration management for the Contacts MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured when present; `dotenvy` never writes to stdout, which
//! MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use crate::search::AggregationStrategy;
use crate::services::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT};
use crate::sources::schema::DEFAULT_DB_FILE_NAME;
use std::env;
use std::path::PathBuf;

/// AddressBook sources directory relative to the user's home.
const SOURCES_DIR_IN_HOME: &str = "Library/Application Support/AddressBook/Sources";

/// Configuration for the Contacts MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose subdirectories are candidate contact sources
    pub sources_dir: PathBuf,

    /// Database file name looked up inside each candidate
    pub db_file_name: String,

    /// Limit used when a search omits one (default: 50)
    pub default_limit: usize,

    /// Largest accepted limit (default: 500)
    pub max_limit: usize,

    /// How sources are visited (default: sequential)
    pub strategy: AggregationStrategy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_SOURCES_DIR`: discovery base directory
    ///   (default: `$HOME/Library/Application Support/AddressBook/Sources`)
    /// - `CONTACTS_DB_FILENAME`: database file name (default: `AddressBook-v22.abcddb`)
    /// - `CONTACTS_DEFAULT_LIMIT`: default page size (default: 50)
    /// - `CONTACTS_MAX_LIMIT`: maximum page size (default: 500)
    /// - `CONTACTS_SEARCH_STRATEGY`: `sequential` or `concurrent` (default: sequential)
    ///
    /// `LOG_LEVEL` is read by the binary before configuration loads, so that
    /// configuration errors are logged.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let sources_dir = match env::var("CONTACTS_SOURCES_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let home =
                    env::var("HOME").map_err(|_| ConfigError::MissingVar("HOME".to_string()))?;
                PathBuf::from(home).join(SOURCES_DIR_IN_HOME)
            }
        };

        let db_file_name =
            env::var("CONTACTS_DB_FILENAME").unwrap_or_else(|_| DEFAULT_DB_FILE_NAME.to_string());
        if db_file_name.trim().is_empty() || db_file_name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DB_FILENAME".to_string(),
                reason: "Must be a plain, non-empty file name".to_string(),
            });
        }

        let default_limit = Self::parse_env_usize("CONTACTS_DEFAULT_LIMIT", DEFAULT_LIMIT)?;
        let max_limit = Self::parse_env_usize("CONTACTS_MAX_LIMIT", DEFAULT_MAX_LIMIT)?;

        if default_limit > max_limit {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DEFAULT_LIMIT".to_string(),
                reason: format!("Must not exceed CONTACTS_MAX_LIMIT ({})", max_limit),
            });
        }

        let strategy = match env::var("CONTACTS_SEARCH_STRATEGY") {
            Ok(val) => val
                .parse::<AggregationStrategy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACTS_SEARCH_STRATEGY".to_string(),
                    reason,
                })?,
            Err(_) => AggregationStrategy::default(),
        };

        Ok(Config {
            sources_dir,
            db_file_name,
            default_limit,
            max_limit,
            strategy,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sources_dir: PathBuf::new(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            strategy: AggregationStrategy::Sequential,
        }
    }
}

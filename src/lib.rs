//! Contacts MCP Server - A Model Context Protocol server for local AddressBook contacts.
//!
//! This library discovers every AddressBook database on the machine, searches
//! each one by partial name, and merges the per-database hits into a single
//! globally paginated, deduplicated result set.
//!
//! # Architecture
//!
//! - **domain**: Handle kinds, phone normalization, display names
//! - **models**: Raw handle rows, contact entries, pagination payloads
//! - **sources**: The `ContactSource` capability, SQLite sources, discovery
//! - **search**: Predicate builder, cross-source aggregation, normalization
//! - **services**: The search orchestrator used by the MCP handlers
//! - **observability**: Search counters and timers
//! - **config**: Configuration management from environment variables
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod server;
pub mod services;
pub mod sources;

pub use config::Config;
pub use error::{ConfigError, SearchError, SourceError};
pub use models::{ContactEntry, ContactSearchResponse, PaginationWindow, RawHandleRow};
pub use observability::MetricsTracker;
pub use search::{AggregationStrategy, SearchPredicate};
pub use server::ContactsMcpServer;
pub use services::{ContactSearchRequest, ContactSearchService, ContactSearchServiceImpl};
pub use sources::{
    discover_sources, ContactSource, DirectorySourceProvider, SourceProvider, SqliteContactSource,
};

//! Search response payload.

use super::{ContactEntry, PaginationWindow};
use serde::{Deserialize, Serialize};

/// Which per-source query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStage {
    Count,
    Fetch,
}

/// A source that was dropped from a search after a query failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSource {
    /// Source label (the database path)
    pub source: String,

    /// Query that failed
    pub stage: SourceStage,

    /// Failure message
    pub message: String,
}

/// The payload returned by a contact search.
///
/// When `partial` is set, at least one source failed mid-search. A source
/// that failed during fetch still contributed its count to
/// `pagination.total`, so `total` can exceed what is actually reachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSearchResponse {
    pub data: Vec<ContactEntry>,
    pub pagination: PaginationWindow,
    pub partial: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_sources: Vec<SkippedSource>,
}

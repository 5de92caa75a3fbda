//! Cross-source pagination.
//!
//! A global `(offset, limit)` window spans every source laid end to end in
//! discovery order. Each source is counted, and only the sources whose rows
//! fall inside the window are fetched, with a source-local offset and limit.
//!
//! Every source is counted even once the page is full, so `total` always
//! covers all of them.

use crate::error::{SearchError, SearchResult, SourceError};
use crate::models::{RawHandleRow, SkippedSource, SourceStage};
use crate::search::SearchPredicate;
use crate::sources::ContactSource;
use futures::future::join_all;
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// How sources are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationStrategy {
    /// One source at a time, in order, carrying the remaining window along.
    #[default]
    Sequential,
    /// Count every source at once, plan windows from prefix sums, then fetch
    /// the intersecting sources at once.
    Concurrent,
}

impl FromStr for AggregationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => Err(format!(
                "Unknown strategy '{}', expected 'sequential' or 'concurrent'",
                other
            )),
        }
    }
}

/// Rows for one page plus the grand total across sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub rows: Vec<RawHandleRow>,
    pub total: usize,
    pub skipped: Vec<SkippedSource>,
}

/// Running state threaded through the sequential fold.
#[derive(Debug)]
struct Accumulator {
    remaining_offset: usize,
    remaining_limit: usize,
    total: usize,
    rows: Vec<RawHandleRow>,
    skipped: Vec<SkippedSource>,
}

impl Accumulator {
    fn new(offset: usize, limit: usize) -> Self {
        Self {
            remaining_offset: offset,
            remaining_limit: limit,
            total: 0,
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn visit(mut self, source: &dyn ContactSource, predicate: &SearchPredicate) -> Self {
        let count = match source.count_matches(predicate) {
            Ok(count) => count,
            Err(e) => {
                self.skipped.push(skip(source.label(), SourceStage::Count, &e));
                return self;
            }
        };
        self.total += count;

        if self.remaining_offset >= count {
            self.remaining_offset -= count;
            tracing::debug!(source = source.label(), count, "Source lies before the window");
            return self;
        }

        // Page already full; counted only.
        if self.remaining_limit == 0 {
            return self;
        }

        match source.fetch_matches(predicate, self.remaining_limit, self.remaining_offset) {
            Ok(rows) => {
                tracing::debug!(
                    source = source.label(),
                    count,
                    local_offset = self.remaining_offset,
                    fetched = rows.len(),
                    "Fetched rows from source"
                );
                self.remaining_limit = self.remaining_limit.saturating_sub(rows.len());
                self.rows.extend(rows);
            }
            Err(e) => {
                // The count stays in `total`.
                self.skipped.push(skip(source.label(), SourceStage::Fetch, &e));
            }
        }
        self.remaining_offset = 0;

        self
    }

    fn finish(self) -> Aggregation {
        Aggregation {
            rows: self.rows,
            total: self.total,
            skipped: self.skipped,
        }
    }
}

fn skip(label: &str, stage: SourceStage, error: &SourceError) -> SkippedSource {
    tracing::warn!(source = label, stage = ?stage, error = %error, "Skipping contact source");
    SkippedSource {
        source: label.to_string(),
        stage,
        message: error.to_string(),
    }
}

/// Realize the global window by visiting sources strictly in order.
///
/// Issues at most one count and one fetch per source. Cancellation is
/// checked before each source.
///
/// Once a source's rows intersect the window its fetch is attempted, and the
/// remaining offset drops to zero whether that fetch succeeds or fails. The
/// remaining limit only shrinks by rows actually fetched, so later sources
/// fill in for a failed one.
pub fn aggregate_sequential(
    sources: &[Arc<dyn ContactSource>],
    predicate: &SearchPredicate,
    limit: usize,
    offset: usize,
    cancel: &CancellationToken,
) -> SearchResult<Aggregation> {
    sources
        .iter()
        .try_fold(Accumulator::new(offset, limit), |acc, source| {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
            Ok(acc.visit(source.as_ref(), predicate))
        })
        .map(Accumulator::finish)
}

/// Source-local slice of the global window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceWindow {
    pub offset: usize,
    pub limit: usize,
}

/// Map the global window onto per-source windows using prefix sums of the
/// source counts. Sources outside the window get `None`.
pub fn plan_windows(counts: &[usize], offset: usize, limit: usize) -> Vec<Option<SourceWindow>> {
    let window_end = offset.saturating_add(limit);
    let mut start = 0usize;

    counts
        .iter()
        .map(|&count| {
            let source_start = start;
            let source_end = source_start + count;
            start = source_end;

            let lo = offset.max(source_start);
            let hi = window_end.min(source_end);
            (lo < hi).then(|| SourceWindow {
                offset: lo - source_start,
                limit: hi - lo,
            })
        })
        .collect()
}

/// Realize the global window with concurrent counts and fetches.
///
/// Matches [`aggregate_sequential`] whenever no fetch fails. A failed fetch
/// leaves its slice of the page empty instead of pulling rows forward from
/// later sources.
pub async fn aggregate_concurrent(
    sources: Vec<Arc<dyn ContactSource>>,
    predicate: Arc<SearchPredicate>,
    limit: usize,
    offset: usize,
    cancel: CancellationToken,
) -> SearchResult<Aggregation> {
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    let count_tasks = sources.iter().map(|source| {
        let source = source.clone();
        let predicate = predicate.clone();
        tokio::task::spawn_blocking(move || source.count_matches(&predicate))
    });

    let mut skipped = Vec::new();
    let mut counts = Vec::with_capacity(sources.len());
    for (source, joined) in sources.iter().zip(join_all(count_tasks).await) {
        let result = joined.map_err(|e| SearchError::Failed(format!("Task join error: {}", e)))?;
        match result {
            Ok(count) => counts.push(count),
            Err(e) => {
                skipped.push(skip(source.label(), SourceStage::Count, &e));
                counts.push(0);
            }
        }
    }
    let total: usize = counts.iter().sum();

    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    let windows = plan_windows(&counts, offset, limit);
    let fetch_tasks = sources
        .iter()
        .zip(&windows)
        .filter_map(|(source, window)| window.map(|w| (source.clone(), w)))
        .map(|(source, window)| {
            let predicate = predicate.clone();
            tokio::task::spawn_blocking(move || {
                let rows = source.fetch_matches(&predicate, window.limit, window.offset);
                (source, rows)
            })
        });

    let mut rows = Vec::new();
    for joined in join_all(fetch_tasks).await {
        let (source, result) =
            joined.map_err(|e| SearchError::Failed(format!("Task join error: {}", e)))?;
        match result {
            Ok(fetched) => rows.extend(fetched),
            Err(e) => skipped.push(skip(source.label(), SourceStage::Fetch, &e)),
        }
    }

    Ok(Aggregation {
        rows,
        total,
        skipped,
    })
}

//! Search metrics tracking.
//!
//! Counters are process-wide totals; nothing here is scoped to a single
//! search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker shared by every search a service runs.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    searches_total: Arc<AtomicU64>,
    searches_failed_total: Arc<AtomicU64>,
    partial_results_total: Arc<AtomicU64>,
    sources_skipped_total: Arc<AtomicU64>,
    entries_returned_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            searches_total: Arc::new(AtomicU64::new(0)),
            searches_failed_total: Arc::new(AtomicU64::new(0)),
            partial_results_total: Arc::new(AtomicU64::new(0)),
            sources_skipped_total: Arc::new(AtomicU64::new(0)),
            entries_returned_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed search.
    pub fn track_search(&self, duration_ms: u128, entry_count: usize, total: usize, skipped: usize) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.entries_returned_total
            .fetch_add(entry_count as u64, Ordering::Relaxed);

        if skipped > 0 {
            self.partial_results_total.fetch_add(1, Ordering::Relaxed);
            self.sources_skipped_total
                .fetch_add(skipped as u64, Ordering::Relaxed);
        }

        tracing::info!(
            duration_ms = duration_ms,
            entry_count = entry_count,
            total = total,
            skipped_sources = skipped,
            "Contact search completed"
        );
    }

    /// Track a search that ended in an error.
    pub fn track_failure(&self, duration_ms: u128, error: &str) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.searches_failed_total.fetch_add(1, Ordering::Relaxed);

        tracing::error!(duration_ms = duration_ms, error = %error, "Contact search failed");
    }

    /// Get the total number of searches.
    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Get the number of failed searches.
    pub fn searches_failed_total(&self) -> u64 {
        self.searches_failed_total.load(Ordering::Relaxed)
    }

    /// Get the number of searches that returned partial results.
    pub fn partial_results_total(&self) -> u64 {
        self.partial_results_total.load(Ordering::Relaxed)
    }

    /// Get the number of source skips across all searches.
    pub fn sources_skipped_total(&self) -> u64 {
        self.sources_skipped_total.load(Ordering::Relaxed)
    }

    /// Get the number of entries handed back across all searches.
    pub fn entries_returned_total(&self) -> u64 {
        self.entries_returned_total.load(Ordering::Relaxed)
    }

    /// Get the search failure rate (0.0 to 1.0).
    pub fn failure_rate(&self) -> f64 {
        let failed = self.searches_failed_total() as f64;
        let total = self.searches_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failed / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Searches: {}\n\
             Failed Searches: {} ({:.2}% failure rate)\n\
             Partial Results: {}\n\
             Sources Skipped: {}\n\
             Entries Returned: {}",
            self.searches_total(),
            self.searches_failed_total(),
            self.failure_rate() * 100.0,
            self.partial_results_total(),
            self.sources_skipped_total(),
            self.entries_returned_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

use contacts_mcp_server::domain::HandleKind;
use contacts_mcp_server::error::{SourceError, SourceResult};
use contacts_mcp_server::models::RawHandleRow;
use contacts_mcp_server::search::SearchPredicate;
use contacts_mcp_server::sources::ContactSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact source for testing.
///
/// Holds a fixed, already-ordered list of rows, ignores the predicate, and
/// tracks method calls (with their limit/offset) for verification. Count and
/// fetch can be made to fail independently.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactSource {
    label: String,
    rows: Arc<Mutex<Vec<RawHandleRow>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fetch_args: Arc<Mutex<Vec<(usize, usize)>>>,
    fail_count: Arc<AtomicBool>,
    fail_fetch: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactSource {
    /// Create a new empty MockContactSource.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            rows: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fetch_args: Arc::new(Mutex::new(Vec::new())),
            fail_count: Arc::new(AtomicBool::new(false)),
            fail_fetch: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a source with `n` distinct email rows named after the label.
    pub fn with_emails(label: &str, n: usize) -> Self {
        let source = Self::new(label);
        for i in 0..n {
            source.add_row(RawHandleRow {
                first_name: Some(label.to_string()),
                last_name: Some(format!("{:03}", i)),
                organization: None,
                handle: format!("{}{}@example.com", label, i),
                kind: HandleKind::Email,
            });
        }
        source
    }

    /// Add a row to the end of the source.
    pub fn add_row(&self, row: RawHandleRow) {
        self.rows.lock().unwrap().push(row);
    }

    /// Make every count query fail.
    pub fn fail_counts(&self) {
        self.fail_count.store(true, Ordering::SeqCst);
    }

    /// Make every fetch query fail.
    pub fn fail_fetches(&self) {
        self.fail_fetch.store(true, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// `(limit, offset)` of every fetch, in call order.
    pub fn fetch_args(&self) -> Vec<(usize, usize)> {
        self.fetch_args.lock().unwrap().clone()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
        self.fetch_args.lock().unwrap().clear();
    }

    /// Share this mock as a trait object while keeping a handle for assertions.
    pub fn shared(&self) -> Arc<dyn ContactSource> {
        Arc::new(self.clone())
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactSource for MockContactSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn count_matches(&self, _predicate: &SearchPredicate) -> SourceResult<usize> {
        self.track_call("count_matches");

        if self.fail_count.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable(format!("{}: count failed", self.label)));
        }
        Ok(self.rows.lock().unwrap().len())
    }

    fn fetch_matches(
        &self,
        _predicate: &SearchPredicate,
        limit: usize,
        offset: usize,
    ) -> SourceResult<Vec<RawHandleRow>> {
        self.track_call("fetch_matches");
        self.fetch_args.lock().unwrap().push((limit, offset));

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable(format!("{}: fetch failed", self.label)));
        }

        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().skip(offset).take(limit).cloned().collect())
    }
}

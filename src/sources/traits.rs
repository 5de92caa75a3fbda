use crate::error::SourceResult;
use crate::models::RawHandleRow;
use crate::search::SearchPredicate;
use std::sync::Arc;

/// One independently queryable contact database.
///
/// Implementations are synchronous: the aggregator visits sources in order
/// and async callers move the whole search onto a blocking thread.
pub trait ContactSource: Send + Sync {
    /// Identifies the source in logs and skipped-source reports.
    fn label(&self) -> &str;

    /// Count phone and email handle rows matching `predicate`.
    ///
    /// Must agree with the number of rows `fetch_matches` can page through.
    fn count_matches(&self, predicate: &SearchPredicate) -> SourceResult<usize>;

    /// Fetch up to `limit` matching rows after skipping `offset`, in the
    /// source's deterministic order.
    fn fetch_matches(
        &self,
        predicate: &SearchPredicate,
        limit: usize,
        offset: usize,
    ) -> SourceResult<Vec<RawHandleRow>>;
}

/// Supplies the ordered list of sources a search runs against.
pub trait SourceProvider: Send + Sync {
    /// Sources in a stable order.
    fn sources(&self) -> SourceResult<Vec<Arc<dyn ContactSource>>>;
}

impl SourceProvider for Vec<Arc<dyn ContactSource>> {
    fn sources(&self) -> SourceResult<Vec<Arc<dyn ContactSource>>> {
        Ok(self.clone())
    }
}

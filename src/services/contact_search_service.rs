//! Contact search service layer.
//!
//! Runs discovery, aggregation and normalization for one search and turns
//! the outcome into a paginated response.

use crate::error::{SearchError, SearchResult};
use crate::models::{ContactSearchResponse, PaginationWindow};
use crate::observability::{MetricsTracker, Timer};
use crate::search::{
    aggregate_concurrent, aggregate_sequential, normalize_rows, Aggregation,
    AggregationStrategy, SearchPredicate,
};
use crate::sources::SourceProvider;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Limit applied when a request does not carry one.
pub const DEFAULT_LIMIT: usize = 50;

/// Largest limit accepted unless configured otherwise.
pub const DEFAULT_MAX_LIMIT: usize = 500;

const MAX_TERM_LEN: usize = 500;

/// Parameters for one contact search.
#[derive(Debug, Clone, Default)]
pub struct ContactSearchRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Contact search service trait for business operations.
#[async_trait]
pub trait ContactSearchService: Send + Sync {
    /// Search every discovered source and return one global page.
    async fn search(
        &self,
        request: ContactSearchRequest,
        cancel: CancellationToken,
    ) -> SearchResult<ContactSearchResponse>;
}

/// Default implementation of ContactSearchService.
#[derive(Clone)]
pub struct ContactSearchServiceImpl {
    provider: Arc<dyn SourceProvider>,
    strategy: AggregationStrategy,
    default_limit: usize,
    max_limit: usize,
    metrics: MetricsTracker,
}

/// Validation helper functions.
impl ContactSearchServiceImpl {
    fn validate_term(field: &str, term: &str) -> Result<(), String> {
        if term.len() > MAX_TERM_LEN {
            return Err(format!("{} too long (max {} characters)", field, MAX_TERM_LEN));
        }
        Ok(())
    }

    fn validate_limit(&self, limit: usize) -> Result<(), String> {
        if limit > self.max_limit {
            return Err(format!("limit {} exceeds maximum of {}", limit, self.max_limit));
        }
        Ok(())
    }
}

impl ContactSearchServiceImpl {
    /// Create a new contact search service.
    pub fn new(provider: Arc<dyn SourceProvider>, strategy: AggregationStrategy) -> Self {
        Self {
            provider,
            strategy,
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            metrics: MetricsTracker::new(),
        }
    }

    /// Override the default and maximum limits.
    pub fn with_limits(mut self, default_limit: usize, max_limit: usize) -> Self {
        self.default_limit = default_limit;
        self.max_limit = max_limit;
        self
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Run a search on the calling thread, visiting sources in order.
    ///
    /// Always uses the sequential strategy. Errors other than validation and
    /// cancellation surface as [`SearchError::Failed`].
    pub fn search_blocking(
        &self,
        first_name: &str,
        last_name: Option<&str>,
        limit: usize,
        offset: usize,
        cancel: &CancellationToken,
    ) -> SearchResult<ContactSearchResponse> {
        self.validate(first_name, last_name, limit)?;

        let timer = Timer::new("contact_search");
        let result = self
            .provider
            .sources()
            .map_err(|e| SearchError::Failed(e.to_string()))
            .and_then(|sources| {
                let predicate = SearchPredicate::build(first_name, last_name);
                aggregate_sequential(&sources, &predicate, limit, offset, cancel)
            })
            .map(|aggregation| assemble(aggregation, limit, offset));

        self.record(timer, result)
    }

    async fn search_concurrent(
        &self,
        first_name: &str,
        last_name: Option<&str>,
        limit: usize,
        offset: usize,
        cancel: CancellationToken,
    ) -> SearchResult<ContactSearchResponse> {
        self.validate(first_name, last_name, limit)?;

        let timer = Timer::new("contact_search_concurrent");
        let predicate = Arc::new(SearchPredicate::build(first_name, last_name));
        let result = self
            .aggregate_concurrently(predicate, limit, offset, cancel)
            .await
            .map(|aggregation| assemble(aggregation, limit, offset));

        self.record(timer, result)
    }

    async fn aggregate_concurrently(
        &self,
        predicate: Arc<SearchPredicate>,
        limit: usize,
        offset: usize,
        cancel: CancellationToken,
    ) -> SearchResult<Aggregation> {
        let provider = self.provider.clone();
        let sources = tokio::task::spawn_blocking(move || provider.sources())
            .await
            .map_err(|e| SearchError::Failed(format!("Task join error: {}", e)))?
            .map_err(|e| SearchError::Failed(e.to_string()))?;

        aggregate_concurrent(sources, predicate, limit, offset, cancel).await
    }

    fn validate(&self, first_name: &str, last_name: Option<&str>, limit: usize) -> SearchResult<()> {
        Self::validate_term("first_name", first_name)
            .and_then(|_| last_name.map_or(Ok(()), |l| Self::validate_term("last_name", l)))
            .and_then(|_| self.validate_limit(limit))
            .map_err(SearchError::InvalidParameters)
    }

    fn record(
        &self,
        timer: Timer,
        result: SearchResult<ContactSearchResponse>,
    ) -> SearchResult<ContactSearchResponse> {
        let duration_ms = timer.finish();
        match result {
            Ok(response) => {
                self.metrics.track_search(
                    duration_ms,
                    response.data.len(),
                    response.pagination.total,
                    response.skipped_sources.len(),
                );
                Ok(response)
            }
            Err(e) => {
                self.metrics.track_failure(duration_ms, &e.to_string());
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ContactSearchService for ContactSearchServiceImpl {
    async fn search(
        &self,
        request: ContactSearchRequest,
        cancel: CancellationToken,
    ) -> SearchResult<ContactSearchResponse> {
        let limit = request.limit.unwrap_or(self.default_limit);
        let offset = request.offset.unwrap_or(0);

        tracing::debug!(
            first_name = %request.first_name,
            last_name = ?request.last_name,
            limit,
            offset,
            strategy = ?self.strategy,
            "Contact search requested"
        );

        match self.strategy {
            AggregationStrategy::Sequential => {
                let service = self.clone();
                tokio::task::spawn_blocking(move || {
                    service.search_blocking(
                        &request.first_name,
                        request.last_name.as_deref(),
                        limit,
                        offset,
                        &cancel,
                    )
                })
                .await
                .map_err(|e| SearchError::Failed(format!("Task join error: {}", e)))?
            }
            AggregationStrategy::Concurrent => {
                self.search_concurrent(
                    &request.first_name,
                    request.last_name.as_deref(),
                    limit,
                    offset,
                    cancel,
                )
                .await
            }
        }
    }
}

fn assemble(aggregation: Aggregation, limit: usize, offset: usize) -> ContactSearchResponse {
    let pagination = PaginationWindow::compute(aggregation.total, limit, offset);
    let data = normalize_rows(aggregation.rows);

    ContactSearchResponse {
        data,
        pagination,
        partial: !aggregation.skipped.is_empty(),
        skipped_sources: aggregation.skipped,
    }
}

//! Contact search core.
//!
//! Predicate construction, cross-source aggregation and row normalization.
//! Everything here is synchronous except the concurrent aggregation strategy.

pub mod aggregator;
pub mod normalizer;
pub mod predicate;

pub use aggregator::{
    aggregate_concurrent, aggregate_sequential, plan_windows, Aggregation, AggregationStrategy,
    SourceWindow,
};
pub use normalizer::normalize_rows;
pub use predicate::{PredicateShape, SearchPredicate};

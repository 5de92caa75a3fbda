//! Observability for contact searches.
//!
//! Atomic counters for searches and source failures, plus a timer that logs
//! operation durations through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};

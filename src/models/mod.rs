//! Data models for contact search.
//!
//! This module contains the raw rows produced by a contact source, the
//! display-ready entries handed back to callers, and the pagination payload
//! wrapped around them.

pub mod contact;
pub mod pagination;
pub mod response;

pub use contact::{ContactEntry, RawHandleRow};
pub use pagination::PaginationWindow;
pub use response::{ContactSearchResponse, SkippedSource, SourceStage};

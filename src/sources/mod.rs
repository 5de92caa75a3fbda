//! Contact sources.
//!
//! A source is one AddressBook database found on disk. This module holds the
//! capability trait the search core consumes, the SQLite implementation of
//! it, and directory discovery.

mod discovery;
mod query;
pub mod schema;
mod sqlite_source;
mod traits;

pub use discovery::{discover_sources, DirectorySourceProvider};
pub use query::HandleUnionQuery;
pub use sqlite_source::SqliteContactSource;
pub use traits::{ContactSource, SourceProvider};

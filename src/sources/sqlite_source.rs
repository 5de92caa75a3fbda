//! SQLite-backed contact source.

use super::query::HandleUnionQuery;
use super::traits::ContactSource;
use crate::domain::HandleKind;
use crate::error::{SourceError, SourceResult};
use crate::models::RawHandleRow;
use crate::search::SearchPredicate;
use rusqlite::{params_from_iter, Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// A read-only AddressBook database.
///
/// The connection is opened once and reused for every search for the rest
/// of the process. It sits behind a mutex because `rusqlite::Connection` is
/// not `Sync`.
pub struct SqliteContactSource {
    label: String,
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteContactSource {
    /// Open a database file read-only.
    pub fn open_read_only(path: &Path) -> SourceResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self {
            label: path.display().to_string(),
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Wrap an already-open connection (in-memory fixtures, tests).
    pub fn from_connection(label: impl Into<String>, conn: Connection) -> Self {
        Self {
            label: label.into(),
            path: None,
            conn: Mutex::new(conn),
        }
    }

    /// Database file this source was opened from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn conn(&self) -> SourceResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SourceError::Unavailable(format!("{}: connection lock poisoned", self.label)))
    }

    fn row_to_handle(row: &Row<'_>) -> rusqlite::Result<RawHandleRow> {
        let kind: String = row.get("kind")?;
        let kind = kind.parse::<HandleKind>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(RawHandleRow {
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            organization: row.get("organization")?,
            handle: row.get("handle")?,
            kind,
        })
    }
}

impl ContactSource for SqliteContactSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn count_matches(&self, predicate: &SearchPredicate) -> SourceResult<usize> {
        let query = HandleUnionQuery::new(predicate);
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&query.count_sql())?;

        let count: i64 =
            stmt.query_row(params_from_iter(query.count_parameters()), |row| row.get(0))?;

        usize::try_from(count)
            .map_err(|_| SourceError::Unavailable(format!("{}: negative count {}", self.label, count)))
    }

    fn fetch_matches(
        &self,
        predicate: &SearchPredicate,
        limit: usize,
        offset: usize,
    ) -> SourceResult<Vec<RawHandleRow>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = HandleUnionQuery::new(predicate);
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&query.page_sql())?;

        let rows = stmt
            .query_map(
                params_from_iter(query.page_parameters(limit, offset)),
                Self::row_to_handle,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }
}

//! Source discovery on disk.

use super::sqlite_source::SqliteContactSource;
use super::traits::{ContactSource, SourceProvider};
use crate::error::SourceResult;
use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Find every `<base_dir>/<subdir>/<db_file_name>` and open it read-only.
///
/// Candidates are visited in file-name order. A missing file, a
/// non-regular file, or a database that refuses to open only excludes that
/// candidate. An unreadable `base_dir` yields an empty list.
pub fn discover_sources(base_dir: &Path, db_file_name: &str) -> Vec<Arc<dyn ContactSource>> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                base_dir = %base_dir.display(),
                error = %e,
                "Cannot read contact sources directory"
            );
            return Vec::new();
        }
    };

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    candidates.sort();

    let mut sources: Vec<Arc<dyn ContactSource>> = Vec::new();
    for candidate in candidates {
        let db_path = candidate.join(db_file_name);

        let is_file = fs::metadata(&db_path)
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            tracing::trace!(candidate = %candidate.display(), "No contact database in candidate");
            continue;
        }

        match SqliteContactSource::open_read_only(&db_path) {
            Ok(source) => {
                tracing::debug!(source = %db_path.display(), "Discovered contact source");
                sources.push(Arc::new(source));
            }
            Err(e) => {
                tracing::warn!(
                    source = %db_path.display(),
                    error = %e,
                    "Skipping contact database that failed to open"
                );
            }
        }
    }

    tracing::info!(
        base_dir = %base_dir.display(),
        source_count = sources.len(),
        "Contact source discovery complete"
    );

    sources
}

/// Discovers sources under a base directory once and reuses them.
///
/// The first non-empty discovery is kept for the life of the provider, so
/// source order (and therefore which rows land on which page) cannot shift
/// between calls. An empty discovery is retried on the next call.
pub struct DirectorySourceProvider {
    base_dir: PathBuf,
    db_file_name: String,
    discovered: OnceCell<Vec<Arc<dyn ContactSource>>>,
}

impl DirectorySourceProvider {
    pub fn new(base_dir: impl Into<PathBuf>, db_file_name: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            db_file_name: db_file_name.into(),
            discovered: OnceCell::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl SourceProvider for DirectorySourceProvider {
    fn sources(&self) -> SourceResult<Vec<Arc<dyn ContactSource>>> {
        if let Some(sources) = self.discovered.get() {
            return Ok(sources.clone());
        }

        let sources = discover_sources(&self.base_dir, &self.db_file_name);
        if sources.is_empty() {
            return Ok(sources);
        }

        // A concurrent first call may have won the race; its list is kept.
        Ok(self.discovered.get_or_init(|| sources).clone())
    }
}

//! Raw row to contact entry conversion.

use crate::models::{ContactEntry, RawHandleRow};
use std::collections::HashSet;

/// Convert fetched rows into display-ready entries.
///
/// Rows whose handle normalizes to an empty string are dropped. Entries are
/// deduplicated on `(name, handle)`, keeping the first occurrence and the
/// input order. The seen-set lives only for this call.
pub fn normalize_rows(rows: Vec<RawHandleRow>) -> Vec<ContactEntry> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(rows.len());
    let mut entries = Vec::with_capacity(rows.len());

    for row in rows {
        let handle = row.normalized_handle();
        if handle.is_empty() {
            continue;
        }

        let name = row.display_name();
        if seen.insert((name.clone(), handle.clone())) {
            entries.push(ContactEntry { name, handle });
        }
    }

    entries
}

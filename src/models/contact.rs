//! Contact rows and entries.

use crate::domain::{display_name, normalize_phone, HandleKind};
use serde::{Deserialize, Serialize};

/// One handle row as returned by a source query.
///
/// A record with two phone numbers and an email produces three rows. Name
/// fields stay optional so "has at least one name field" keeps its exact
/// SQL meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHandleRow {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub handle: String,
    pub kind: HandleKind,
}

impl RawHandleRow {
    /// Name derived from first/last name, organization, or the placeholder.
    pub fn display_name(&self) -> String {
        display_name(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.organization.as_deref(),
        )
    }

    /// Handle in output form: phones normalized, emails untouched.
    pub fn normalized_handle(&self) -> String {
        match self.kind {
            HandleKind::Phone => normalize_phone(&self.handle),
            HandleKind::Email => self.handle.clone(),
        }
    }
}

/// A display-ready search hit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    pub handle: String,
}

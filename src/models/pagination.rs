//! Pagination metadata for a globally paginated result set.

use serde::{Deserialize, Serialize};

/// Where a page sits inside the full, cross-source result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationWindow {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
    pub page: usize,
    pub total_pages: usize,
}

impl PaginationWindow {
    /// Compute the window metadata for a request of `limit` rows starting at
    /// `offset`, given the grand `total` across every source.
    ///
    /// A zero `limit` reports page 1 of 0.
    pub fn compute(total: usize, limit: usize, offset: usize) -> Self {
        let (page, total_pages) = if limit == 0 {
            (1, 0)
        } else {
            (offset / limit + 1, total.div_ceil(limit))
        };

        Self {
            total,
            limit,
            offset,
            has_more: offset.saturating_add(limit) < total,
            page,
            total_pages,
        }
    }
}

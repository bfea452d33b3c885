//! Page-number pagination for the film listing.
//!
//! Pages are 1-indexed. A page past the last one is not an error: it yields
//! an empty row slice while the descriptor still reports the true totals.

use serde::Serialize;

use crate::error::CoreError;

/// Default page size for the film listing.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Validate `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`.
    pub fn new(page: i64, page_size: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(CoreError::Validation(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        Ok(Self { page, page_size })
    }

    /// Build from optional query parameters, applying defaults.
    pub fn from_params(page: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        Self::new(page.unwrap_or(1), limit.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`, saturating on overflow.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Pagination descriptor returned alongside a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_items: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(total_items: i64, request: &PageRequest) -> Self {
        Self {
            total_items,
            page: request.page(),
            page_size: request.page_size(),
            total_pages: total_pages(total_items, request.page_size()),
        }
    }
}

/// `ceil(total_items / page_size)`; zero when there are no items.
pub fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items <= 0 {
        return 0;
    }
    (total_items + page_size - 1) / page_size
}

/// Clamp a user-provided limit for the plain CRUD list endpoints.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided skip/offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

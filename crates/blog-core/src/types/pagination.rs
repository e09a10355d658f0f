//! Pagination types for list operations.
//!
//! A window is addressed by a 1-based `page` and a `limit`; the SQL
//! offset is `(page - 1) * limit`. Values are never clamped: a
//! non-positive page or limit, or a window the store cannot address, is a
//! caller error reported by [`PageRequest::validate_window`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::result::AppResult;

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: u64 = 10;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request. The window is not validated here.
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Check the window and convert it to SQL `LIMIT`/`OFFSET` values.
    ///
    /// Both `page` and `limit` must be at least 1, and neither the limit
    /// nor the computed offset may exceed `i64::MAX`.
    pub fn validate_window(&self) -> AppResult<Window> {
        self.validate()?;

        let limit = i64::try_from(self.limit).map_err(|_| {
            AppError::validation(format!("Page limit {} is too large", self.limit))
        })?;
        let offset = (self.page - 1)
            .checked_mul(self.limit)
            .and_then(|offset| i64::try_from(offset).ok())
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Page {} with limit {} is out of range",
                    self.page, self.limit
                ))
            })?;

        Ok(Window { limit, offset })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A validated window, ready to bind as `LIMIT` and `OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Rows per page.
    pub limit: i64,
    /// Rows skipped before the page.
    pub offset: i64,
}

/// Paginated response wrapper.
///
/// `total_count` is the number of rows matching the filter predicate,
/// independent of the requested window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page, newest first.
    pub items: Vec<T>,
    /// Total number of matching items across all pages.
    pub total_count: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total_count: u64) -> Self {
        let total_pages = if total_count == 0 || page.limit == 0 {
            1
        } else {
            total_count.div_ceil(page.limit)
        };
        Self {
            items,
            total_count,
            page: page.page,
            limit: page.limit,
            total_pages,
            has_next: page.page < total_pages,
            has_previous: page.page > 1,
        }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

//! User list query descriptor.

use serde::{Deserialize, Serialize};

use blog_core::traits::QueryDescriptor;
use blog_core::types::{FilterGroup, PageRequest};

/// Columns searched by [`UserQuery::search`].
pub const SEARCH_COLUMNS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "username",
    "phone_number",
];

/// Parameters for listing users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// Requested window.
    #[serde(flatten)]
    pub page: PageRequest,
    /// Case-insensitive substring matched against names, email, username
    /// and phone number; a match on any column qualifies the row.
    #[serde(default)]
    pub search: Option<String>,
}

impl UserQuery {
    /// Create a query for the given window with no search.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: PageRequest::new(page, limit),
            search: None,
        }
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

impl QueryDescriptor for UserQuery {
    fn page(&self) -> &PageRequest {
        &self.page
    }

    fn filter_groups(&self) -> Vec<FilterGroup> {
        vec![FilterGroup::search(self.search.as_deref(), SEARCH_COLUMNS)]
    }
}

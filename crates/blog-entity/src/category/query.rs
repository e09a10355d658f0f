//! Category list query descriptor.

use serde::{Deserialize, Serialize};

use blog_core::traits::QueryDescriptor;
use blog_core::types::{FilterGroup, PageRequest};

/// Parameters for listing categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
    /// Requested window.
    #[serde(flatten)]
    pub page: PageRequest,
    /// Case-insensitive substring matched against the title.
    #[serde(default)]
    pub search: Option<String>,
}

impl CategoryQuery {
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

impl QueryDescriptor for CategoryQuery {
    fn page(&self) -> &PageRequest {
        &self.page
    }

    fn filter_groups(&self) -> Vec<FilterGroup> {
        vec![FilterGroup::search(self.search.as_deref(), &["title"])]
    }
}

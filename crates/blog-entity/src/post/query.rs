//! Post list query descriptor.

use serde::{Deserialize, Serialize};

use blog_core::traits::QueryDescriptor;
use blog_core::types::{FilterGroup, FilterMode, PageRequest};

/// Parameters for listing posts.
///
/// The search group and the foreign-key group are joined with `AND`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostQuery {
    /// Requested window.
    #[serde(flatten)]
    pub page: PageRequest,
    /// Case-insensitive substring matched against the title.
    #[serde(default)]
    pub search: Option<String>,
    /// Only posts in this category (ignored unless positive).
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Only posts by this author (ignored unless positive).
    #[serde(default)]
    pub user_id: Option<i64>,
    /// How `category_id` and `user_id` combine when both are set.
    #[serde(default)]
    pub mode: FilterMode,
}

impl PostQuery {
    /// Create a query for the given window with no filters.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: PageRequest::new(page, limit),
            ..Self::default()
        }
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict to one category.
    pub fn in_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Restrict to one author.
    pub fn by_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set how the foreign-key filters combine.
    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }
}

impl QueryDescriptor for PostQuery {
    fn page(&self) -> &PageRequest {
        &self.page
    }

    fn filter_groups(&self) -> Vec<FilterGroup> {
        vec![
            FilterGroup::search(self.search.as_deref(), &["title"]),
            FilterGroup::new(self.mode)
                .eq_if_positive("category_id", self.category_id)
                .eq_if_positive("user_id", self.user_id),
        ]
    }
}

//! Like list query descriptor.

use serde::{Deserialize, Serialize};

use blog_core::traits::QueryDescriptor;
use blog_core::types::{FilterGroup, FilterMode, PageRequest};

/// Parameters for listing likes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikeQuery {
    /// Requested window.
    #[serde(flatten)]
    pub page: PageRequest,
    /// Only likes on this post (ignored unless positive).
    #[serde(default)]
    pub post_id: Option<i64>,
    /// Only likes by this user (ignored unless positive).
    #[serde(default)]
    pub user_id: Option<i64>,
    /// How `post_id` and `user_id` combine when both are set.
    #[serde(default)]
    pub mode: FilterMode,
}

impl LikeQuery {
    /// Create a query for the given window with no filters.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: PageRequest::new(page, limit),
            ..Self::default()
        }
    }

    /// Restrict to one post.
    pub fn on_post(mut self, post_id: i64) -> Self {
        self.post_id = Some(post_id);
        self
    }

    /// Restrict to one user.
    pub fn by_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set how the filters combine.
    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }
}

impl QueryDescriptor for LikeQuery {
    fn page(&self) -> &PageRequest {
        &self.page
    }

    fn filter_groups(&self) -> Vec<FilterGroup> {
        vec![
            FilterGroup::new(self.mode)
                .eq_if_positive("post_id", self.post_id)
                .eq_if_positive("user_id", self.user_id),
        ]
    }
}

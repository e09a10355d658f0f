//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog post written by a user within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub description: String,
    /// Path of the attached image.
    pub image_url: Option<String>,
    /// The author.
    pub user_id: i64,
    /// The category the post belongs to.
    pub category_id: i64,
    /// Number of times the post was viewed.
    pub views_count: i32,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated (null until the first update).
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub description: String,
    /// Path of the attached image.
    pub image_url: Option<String>,
    /// The author.
    pub user_id: i64,
    /// The category the post belongs to.
    pub category_id: i64,
    /// Initial view counter.
    #[serde(default)]
    pub views_count: i32,
}

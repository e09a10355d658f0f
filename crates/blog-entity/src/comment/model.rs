//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment left by a user on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// The commented post.
    pub post_id: i64,
    /// The commenting user.
    pub user_id: i64,
    /// Comment body.
    pub description: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated (null until the first update).
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The commented post.
    pub post_id: i64,
    /// The commenting user.
    pub user_id: i64,
    /// Comment body.
    pub description: String,
}

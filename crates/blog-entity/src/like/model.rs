//! Like entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's reaction to a post.
///
/// Nothing prevents the same user from liking a post twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Like {
    /// Unique like identifier.
    pub id: i64,
    /// The reacted post.
    pub post_id: i64,
    /// The reacting user.
    pub user_id: i64,
    /// Reaction kind, e.g. `"like"` or `"dislike"`.
    pub status: String,
}

/// Data required to create a new like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLike {
    /// The reacted post.
    pub post_id: i64,
    /// The reacting user.
    pub user_id: i64,
    /// Reaction kind.
    pub status: String,
}

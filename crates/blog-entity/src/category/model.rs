//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A flat post category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Category title.
    pub title: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category title.
    pub title: String,
}

impl CreateCategory {
    /// Create a payload with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

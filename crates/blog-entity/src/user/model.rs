//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::gender::Gender;
use super::role::UserRole;

/// A registered blog user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Email address.
    pub email: String,
    /// Gender (optional).
    pub gender: Option<Gender>,
    /// Login name.
    pub username: String,
    /// Password hash produced by the caller.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Path of the uploaded profile image.
    pub profile_image_url: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has superadmin privileges.
    pub fn is_superadmin(&self) -> bool {
        self.role.is_superadmin()
    }
}

/// Data required to create a new user.
///
/// Email and username formats are validated by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Email address.
    pub email: String,
    /// Gender (optional).
    pub gender: Option<Gender>,
    /// Login name.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Path of the uploaded profile image.
    pub profile_image_url: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

//! User table mapping and user-specific lookups.

use sqlx::Postgres;
use sqlx::query_builder::Separated;
use tracing::debug;

use blog_core::result::AppResult;
use blog_entity::user::{CreateUser, User, UserQuery};

use crate::table::{Table, TableRepository, store_failure};

/// Repository for users.
pub type UserRepository = TableRepository<User>;

impl Table for User {
    type New = CreateUser;
    type Query = UserQuery;

    const NAME: &'static str = "users";
    const ENTITY: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "phone_number",
        "email",
        "gender",
        "username",
        "password_hash",
        "profile_image_url",
        "role",
        "created_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "phone_number",
        "email",
        "gender",
        "username",
        "password_hash",
        "profile_image_url",
        "role",
    ];
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values<'args>(
        data: &CreateUser,
        values: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        values
            .push_bind(data.first_name.clone())
            .push_bind(data.last_name.clone())
            .push_bind(data.phone_number.clone())
            .push_bind(data.email.clone())
            .push_bind(data.gender)
            .push_bind(data.username.clone())
            .push_bind(data.password_hash.clone())
            .push_bind(data.profile_image_url.clone())
            .push_bind(data.role);
    }

    fn push_update_assignments<'args>(
        &self,
        set: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        set.push("first_name = ")
            .push_bind_unseparated(self.first_name.clone());
        set.push("last_name = ")
            .push_bind_unseparated(self.last_name.clone());
        set.push("phone_number = ")
            .push_bind_unseparated(self.phone_number.clone());
        set.push("email = ").push_bind_unseparated(self.email.clone());
        set.push("gender = ").push_bind_unseparated(self.gender);
        set.push("username = ")
            .push_bind_unseparated(self.username.clone());
        set.push("password_hash = ")
            .push_bind_unseparated(self.password_hash.clone());
        set.push("profile_image_url = ")
            .push_bind_unseparated(self.profile_image_url.clone());
        set.push("role = ").push_bind_unseparated(self.role);
    }
}

impl TableRepository<User> {
    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        debug!(table = User::NAME, "Looking up user by email");
        let sql = format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
            User::COLUMNS.join(", ")
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(self.pool())
            .await
            .map_err(store_failure::<User>("find"))
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        debug!(table = User::NAME, "Looking up user by username");
        let sql = format!(
            "SELECT {} FROM users WHERE LOWER(username) = LOWER($1)",
            User::COLUMNS.join(", ")
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(self.pool())
            .await
            .map_err(store_failure::<User>("find"))
    }
}

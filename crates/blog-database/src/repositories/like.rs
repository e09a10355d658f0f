//! Like table mapping.
//!
//! Likes carry no timestamps, so lists are ordered by post.

use sqlx::Postgres;
use sqlx::query_builder::Separated;

use blog_entity::like::{CreateLike, Like, LikeQuery};

use crate::table::{Table, TableRepository};

/// Repository for likes.
pub type LikeRepository = TableRepository<Like>;

impl Table for Like {
    type New = CreateLike;
    type Query = LikeQuery;

    const NAME: &'static str = "likes";
    const ENTITY: &'static str = "Like";
    const COLUMNS: &'static [&'static str] = &["id", "post_id", "user_id", "status"];
    const INSERT_COLUMNS: &'static [&'static str] = &["post_id", "user_id", "status"];
    const ORDER_BY: &'static str = "post_id DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values<'args>(
        data: &CreateLike,
        values: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        values
            .push_bind(data.post_id)
            .push_bind(data.user_id)
            .push_bind(data.status.clone());
    }

    fn push_update_assignments<'args>(
        &self,
        set: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        set.push("post_id = ").push_bind_unseparated(self.post_id);
        set.push("user_id = ").push_bind_unseparated(self.user_id);
        set.push("status = ").push_bind_unseparated(self.status.clone());
    }
}

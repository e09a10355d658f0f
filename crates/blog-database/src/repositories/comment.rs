//! Comment table mapping.

use sqlx::Postgres;
use sqlx::query_builder::Separated;

use blog_entity::comment::{Comment, CommentQuery, CreateComment};

use crate::table::{Table, TableRepository};

/// Repository for comments.
pub type CommentRepository = TableRepository<Comment>;

impl Table for Comment {
    type New = CreateComment;
    type Query = CommentQuery;

    const NAME: &'static str = "comments";
    const ENTITY: &'static str = "Comment";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "post_id",
        "user_id",
        "description",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &["post_id", "user_id", "description"];
    const ORDER_BY: &'static str = "created_at DESC, id DESC";
    const UPDATED_AT: Option<&'static str> = Some("updated_at");

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values<'args>(
        data: &CreateComment,
        values: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        values
            .push_bind(data.post_id)
            .push_bind(data.user_id)
            .push_bind(data.description.clone());
    }

    fn push_update_assignments<'args>(
        &self,
        set: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        set.push("post_id = ").push_bind_unseparated(self.post_id);
        set.push("user_id = ").push_bind_unseparated(self.user_id);
        set.push("description = ")
            .push_bind_unseparated(self.description.clone());
    }
}

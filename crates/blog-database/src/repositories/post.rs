//! Post table mapping and view counting.

use sqlx::Postgres;
use sqlx::query_builder::Separated;
use tracing::debug;

use blog_core::error::AppError;
use blog_core::result::AppResult;
use blog_entity::post::{CreatePost, Post, PostQuery};

use crate::table::{Table, TableRepository, store_failure};

/// Repository for posts.
pub type PostRepository = TableRepository<Post>;

impl Table for Post {
    type New = CreatePost;
    type Query = PostQuery;

    const NAME: &'static str = "posts";
    const ENTITY: &'static str = "Post";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "image_url",
        "user_id",
        "category_id",
        "views_count",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "image_url",
        "user_id",
        "category_id",
        "views_count",
    ];
    const ORDER_BY: &'static str = "created_at DESC, id DESC";
    const UPDATED_AT: Option<&'static str> = Some("updated_at");

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values<'args>(
        data: &CreatePost,
        values: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        values
            .push_bind(data.title.clone())
            .push_bind(data.description.clone())
            .push_bind(data.image_url.clone())
            .push_bind(data.user_id)
            .push_bind(data.category_id)
            .push_bind(data.views_count);
    }

    fn push_update_assignments<'args>(
        &self,
        set: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        set.push("title = ").push_bind_unseparated(self.title.clone());
        set.push("description = ")
            .push_bind_unseparated(self.description.clone());
        set.push("image_url = ")
            .push_bind_unseparated(self.image_url.clone());
        set.push("user_id = ").push_bind_unseparated(self.user_id);
        set.push("category_id = ")
            .push_bind_unseparated(self.category_id);
        set.push("views_count = ")
            .push_bind_unseparated(self.views_count);
    }
}

impl TableRepository<Post> {
    /// Atomically add one view and return the new count.
    ///
    /// Leaves `updated_at` untouched; a view is not an edit.
    pub async fn increment_views(&self, id: i64) -> AppResult<i32> {
        debug!(table = Post::NAME, id, "Incrementing views");
        sqlx::query_scalar::<_, i32>(
            "UPDATE posts SET views_count = views_count + 1 WHERE id = $1 RETURNING views_count",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(store_failure::<Post>("update"))?
        .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))
    }
}

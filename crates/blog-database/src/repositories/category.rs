//! Category table mapping.

use sqlx::Postgres;
use sqlx::query_builder::Separated;

use blog_entity::category::{Category, CategoryQuery, CreateCategory};

use crate::table::{Table, TableRepository};

/// Repository for categories.
pub type CategoryRepository = TableRepository<Category>;

impl Table for Category {
    type New = CreateCategory;
    type Query = CategoryQuery;

    const NAME: &'static str = "categories";
    const ENTITY: &'static str = "Category";
    const COLUMNS: &'static [&'static str] = &["id", "title", "created_at"];
    const INSERT_COLUMNS: &'static [&'static str] = &["title"];
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values<'args>(
        data: &CreateCategory,
        values: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        values.push_bind(data.title.clone());
    }

    fn push_update_assignments<'args>(
        &self,
        set: &mut Separated<'_, 'args, Postgres, &'static str>,
    ) {
        set.push("title = ").push_bind_unseparated(self.title.clone());
    }
}

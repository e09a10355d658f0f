//! Generic table-backed repository.
//!
//! Every blog entity is stored in one table with a `BIGSERIAL` primary key
//! named `id`. [`Table`] describes the per-entity mapping (table name,
//! column lists, ordering, how to bind insert and update values) and
//! [`TableRepository`] turns that mapping into parameterized SQL.
//!
//! Identifiers in the generated SQL come only from the static mapping;
//! every caller-supplied value, including search patterns and the
//! window, is a bound parameter.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use blog_core::error::{AppError, ErrorKind};
use blog_core::result::AppResult;
use blog_core::traits::{QueryDescriptor, Repository};
use blog_core::types::{FilterGroup, FilterValue, PageResponse, Window};

/// Mapping between an entity and its table.
pub trait Table:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    /// Caller-supplied fields for a new row.
    type New: Send + Sync + 'static;
    /// Descriptor accepted by list operations.
    type Query: QueryDescriptor + 'static;

    /// Table name.
    const NAME: &'static str;
    /// Entity name used in error messages.
    const ENTITY: &'static str;
    /// Columns selected and returned, in `FromRow` order.
    const COLUMNS: &'static [&'static str];
    /// Columns written by an insert, in the order
    /// [`Table::push_insert_values`] binds them.
    const INSERT_COLUMNS: &'static [&'static str];
    /// `ORDER BY` clause for list operations.
    const ORDER_BY: &'static str;
    /// Column stamped with `NOW()` on every update, if any.
    const UPDATED_AT: Option<&'static str> = None;

    /// Primary key of this row.
    fn id(&self) -> i64;

    /// Bind one value per [`Table::INSERT_COLUMNS`] entry.
    fn push_insert_values<'args>(
        data: &Self::New,
        values: &mut Separated<'_, 'args, Postgres, &'static str>,
    );

    /// Push `column = <bind>` for every mutable column.
    fn push_update_assignments<'args>(
        &self,
        set: &mut Separated<'_, 'args, Postgres, &'static str>,
    );
}

/// Repository over one [`Table`].
pub struct TableRepository<T> {
    pool: PgPool,
    _table: PhantomData<fn() -> T>,
}

impl<T> TableRepository<T> {
    /// Create a new repository sharing `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _table: PhantomData,
        }
    }

    /// Return the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl<T> Clone for TableRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<T: Table> fmt::Debug for TableRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRepository")
            .field("table", &T::NAME)
            .finish()
    }
}

#[async_trait]
impl<T: Table> Repository for TableRepository<T> {
    type Entity = T;
    type NewEntity = T::New;
    type Query = T::Query;

    async fn create(&self, data: &T::New) -> AppResult<T> {
        debug!(table = T::NAME, "Inserting row");
        insert_sql::<T>(data)
            .build_query_as::<T>()
            .fetch_one(&self.pool)
            .await
            .map_err(store_failure::<T>("create"))
    }

    async fn get(&self, id: i64) -> AppResult<T> {
        debug!(table = T::NAME, id, "Fetching row");
        select_by_id_sql::<T>(id)
            .build_query_as::<T>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_failure::<T>("find"))?
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn get_all(&self, query: &T::Query) -> AppResult<PageResponse<T>> {
        let page = query.page();
        let window = page.validate_window()?;
        let groups = query.filter_groups();
        debug!(
            table = T::NAME,
            page = page.page,
            limit = page.limit,
            "Listing rows"
        );

        let items = select_page_sql::<T>(&groups, window)
            .build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_failure::<T>("list"))?;

        // Separate round trip; a concurrent insert can skew the total.
        let total: i64 = count_sql::<T>(&groups)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(store_failure::<T>("count"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn update(&self, entity: &T) -> AppResult<T> {
        let id = entity.id();
        debug!(table = T::NAME, id, "Updating row");
        update_sql::<T>(entity)
            .build_query_as::<T>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_failure::<T>("update"))?
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        debug!(table = T::NAME, id, "Deleting row");
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", T::NAME))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_failure::<T>("delete"))?;

        if result.rows_affected() == 0 {
            return Err(not_found::<T>(id));
        }
        Ok(())
    }
}

/// Map a sqlx error into a `Database` failure naming the entity.
pub(crate) fn store_failure<T: Table>(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to {action} {}", T::ENTITY),
            e,
        )
    }
}

fn not_found<T: Table>(id: i64) -> AppError {
    AppError::not_found(format!("{} {id} not found", T::ENTITY))
}

fn select_list<T: Table>() -> String {
    T::COLUMNS.join(", ")
}

fn insert_sql<T: Table>(data: &T::New) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        T::NAME,
        T::INSERT_COLUMNS.join(", ")
    ));
    {
        let mut values = qb.separated(", ");
        T::push_insert_values(data, &mut values);
    }
    qb.push(") RETURNING ");
    qb.push(select_list::<T>());
    qb
}

fn select_by_id_sql<T: Table>(id: i64) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE id = ",
        select_list::<T>(),
        T::NAME
    ));
    qb.push_bind(id);
    qb
}

fn update_sql<T: Table>(entity: &T) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", T::NAME));
    {
        let mut set = qb.separated(", ");
        entity.push_update_assignments(&mut set);
        if let Some(column) = T::UPDATED_AT {
            set.push(format!("{column} = NOW()"));
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(entity.id());
    qb.push(" RETURNING ");
    qb.push(select_list::<T>());
    qb
}

fn select_page_sql<T: Table>(
    groups: &[FilterGroup],
    window: Window,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", select_list::<T>(), T::NAME));
    push_predicate(&mut qb, groups);
    qb.push(" ORDER BY ");
    qb.push(T::ORDER_BY);
    qb.push(" LIMIT ");
    qb.push_bind(window.limit);
    qb.push(" OFFSET ");
    qb.push_bind(window.offset);
    qb
}

fn count_sql<T: Table>(groups: &[FilterGroup]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", T::NAME));
    push_predicate(&mut qb, groups);
    qb
}

/// Append `WHERE (g1) AND (g2) ...`, skipping empty groups.
fn push_predicate(qb: &mut QueryBuilder<'static, Postgres>, groups: &[FilterGroup]) {
    let mut first = true;
    for group in groups.iter().filter(|g| !g.is_empty()) {
        qb.push(if first { " WHERE (" } else { " AND (" });
        first = false;
        for (i, field) in group.fields.iter().enumerate() {
            if i > 0 {
                qb.push(group.mode.as_sql());
            }
            qb.push(field.field);
            qb.push(field.op.as_sql());
            match &field.value {
                FilterValue::Text(text) => qb.push_bind(text.clone()),
                FilterValue::Integer(value) => qb.push_bind(*value),
            };
        }
        qb.push(")");
    }
}

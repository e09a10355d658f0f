//! Generic repository traits for database access.

use async_trait::async_trait;
use serde::Serialize;

use crate::result::AppResult;
use crate::types::filter::FilterGroup;
use crate::types::pagination::{PageRequest, PageResponse};

/// Per-entity parameters for a list operation.
///
/// A descriptor is built fresh for each request, translated once into a
/// window and a predicate, and then discarded.
pub trait QueryDescriptor: Send + Sync {
    /// The requested window.
    fn page(&self) -> &PageRequest;

    /// Predicate groups, combined with `AND`. Empty groups are ignored.
    fn filter_groups(&self) -> Vec<FilterGroup>;
}

/// Uniform CRUD contract implemented once per entity.
///
/// Identities are store-generated integers. Every failure is returned to
/// the caller as-is; implementations never retry.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// The stored record.
    type Entity: Serialize + Send + Sync + 'static;
    /// Caller-supplied fields for a new record.
    type NewEntity: Send + Sync + 'static;
    /// Query descriptor accepted by [`Repository::get_all`].
    type Query: QueryDescriptor + 'static;

    /// Insert a record; the store assigns its id and creation time.
    async fn create(&self, data: &Self::NewEntity) -> AppResult<Self::Entity>;

    /// Fetch one record, or `NotFound`.
    async fn get(&self, id: i64) -> AppResult<Self::Entity>;

    /// Fetch one window of records matching the query, newest first.
    ///
    /// An empty result is a page with no items, never a failure.
    async fn get_all(&self, query: &Self::Query) -> AppResult<PageResponse<Self::Entity>>;

    /// Overwrite every mutable field of the record with `entity.id`, or
    /// `NotFound`.
    async fn update(&self, entity: &Self::Entity) -> AppResult<Self::Entity>;

    /// Remove a record, or `NotFound` when nothing was deleted.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

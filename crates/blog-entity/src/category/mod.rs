//! Category domain entities.

pub mod model;
pub mod query;

pub use model::{Category, CreateCategory};
pub use query::CategoryQuery;

//! Like domain entities.

pub mod model;
pub mod query;

pub use model::{CreateLike, Like};
pub use query::LikeQuery;

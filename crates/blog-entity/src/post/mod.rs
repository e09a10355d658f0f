//! Post domain entities.

pub mod model;
pub mod query;

pub use model::{CreatePost, Post};
pub use query::PostQuery;

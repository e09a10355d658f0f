//! Comment domain entities.

pub mod model;
pub mod query;

pub use model::{Comment, CreateComment};
pub use query::CommentQuery;

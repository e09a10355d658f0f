//! Table mappings and repositories for every blog entity.

pub mod category;
pub mod comment;
pub mod like;
pub mod post;
pub mod user;

pub use category::CategoryRepository;
pub use comment::CommentRepository;
pub use like::LikeRepository;
pub use post::PostRepository;
pub use user::UserRepository;

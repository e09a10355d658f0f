//! Storage facade.
//!
//! [`Storage`] is the single capability surface handed to request
//! handlers: one accessor per entity, each returning a long-lived
//! repository. [`PgStorage`] is built once from a [`DatabasePool`] and is
//! only read after construction, so an `Arc<PgStorage>` can be shared
//! freely between tasks.

use blog_core::result::AppResult;
use blog_core::traits::Repository;
use blog_entity::category::{Category, CategoryQuery, CreateCategory};
use blog_entity::comment::{Comment, CommentQuery, CreateComment};
use blog_entity::like::{CreateLike, Like, LikeQuery};
use blog_entity::post::{CreatePost, Post, PostQuery};
use blog_entity::user::{CreateUser, User, UserQuery};
use tracing::info;

use crate::connection::DatabasePool;
use crate::repositories::{
    CategoryRepository, CommentRepository, LikeRepository, PostRepository, UserRepository,
};

/// Category repository contract.
pub type CategoryStore =
    dyn Repository<Entity = Category, NewEntity = CreateCategory, Query = CategoryQuery>;
/// Comment repository contract.
pub type CommentStore =
    dyn Repository<Entity = Comment, NewEntity = CreateComment, Query = CommentQuery>;
/// User repository contract.
pub type UserStore = dyn Repository<Entity = User, NewEntity = CreateUser, Query = UserQuery>;
/// Post repository contract.
pub type PostStore = dyn Repository<Entity = Post, NewEntity = CreatePost, Query = PostQuery>;
/// Like repository contract.
pub type LikeStore = dyn Repository<Entity = Like, NewEntity = CreateLike, Query = LikeQuery>;

/// Aggregates the repositories of all five entities.
pub trait Storage: Send + Sync {
    /// Category repository.
    fn category(&self) -> &CategoryStore;
    /// Comment repository.
    fn comment(&self) -> &CommentStore;
    /// User repository.
    fn user(&self) -> &UserStore;
    /// Post repository.
    fn post(&self) -> &PostStore;
    /// Like repository.
    fn like(&self) -> &LikeStore;
}

/// PostgreSQL-backed [`Storage`].
#[derive(Debug, Clone)]
pub struct PgStorage {
    db: DatabasePool,
    categories: CategoryRepository,
    comments: CommentRepository,
    users: UserRepository,
    posts: PostRepository,
    likes: LikeRepository,
}

impl PgStorage {
    /// Build every repository over `db`.
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        info!("Storage facade initialized");
        Self {
            categories: CategoryRepository::new(pool.clone()),
            comments: CommentRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            likes: LikeRepository::new(pool),
            db,
        }
    }

    /// Concrete user repository, for lookups outside the CRUD contract.
    pub fn user_repository(&self) -> &UserRepository {
        &self.users
    }

    /// Concrete post repository, for view counting.
    pub fn post_repository(&self) -> &PostRepository {
        &self.posts
    }

    /// Check store connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }

    /// Close the underlying pool. Repositories fail after this.
    pub async fn close(&self) {
        self.db.close().await;
    }
}

impl Storage for PgStorage {
    fn category(&self) -> &CategoryStore {
        &self.categories
    }

    fn comment(&self) -> &CommentStore {
        &self.comments
    }

    fn user(&self) -> &UserStore {
        &self.users
    }

    fn post(&self) -> &PostStore {
        &self.posts
    }

    fn like(&self) -> &LikeStore {
        &self.likes
    }
}

//! Shared test helpers for integration tests.

use tokio::sync::{Mutex, MutexGuard};

use blog_core::config::DatabaseConfig;
use blog_database::{DatabasePool, PgStorage, Storage};
use blog_entity::category::{Category, CreateCategory};
use blog_entity::post::{CreatePost, Post};
use blog_entity::user::{CreateUser, User, UserRole};

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL: &str = "BLOG_TEST_DATABASE_URL";

static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Test database context with a clean schema.
pub struct TestDb {
    /// Storage facade under test
    pub storage: PgStorage,
    _guard: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Connect, migrate and truncate, or `None` when no database is configured.
    pub async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
            eprintln!("skipping: {TEST_DATABASE_URL} is not set");
            return None;
        };

        let guard = DB_LOCK.lock().await;

        let mut config = DatabaseConfig::with_url(url);
        config.max_connections = 4;
        let db = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database");

        blog_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db).await;

        Some(Self {
            storage: PgStorage::new(db),
            _guard: guard,
        })
    }

    /// Remove all rows and reset identity sequences.
    async fn clean_database(db: &DatabasePool) {
        sqlx::query("TRUNCATE likes, comments, posts, categories, users RESTART IDENTITY CASCADE")
            .execute(db.pool())
            .await
            .expect("Failed to clean database");
    }

    /// Create a user whose email and username derive from `handle`.
    pub async fn create_user(&self, handle: &str) -> User {
        self.storage
            .user()
            .create(&new_user(handle))
            .await
            .expect("Failed to create user")
    }

    /// Create a category.
    pub async fn create_category(&self, title: &str) -> Category {
        self.storage
            .category()
            .create(&CreateCategory::new(title))
            .await
            .expect("Failed to create category")
    }

    /// Create a post by `user_id` in `category_id`.
    pub async fn create_post(&self, user_id: i64, category_id: i64, title: &str) -> Post {
        self.storage
            .post()
            .create(&CreatePost {
                title: title.to_string(),
                description: format!("Body of {title}"),
                image_url: None,
                user_id,
                category_id,
                views_count: 0,
            })
            .await
            .expect("Failed to create post")
    }
}

/// Build a create payload for a regular user.
pub fn new_user(handle: &str) -> CreateUser {
    CreateUser {
        first_name: format!("First{handle}"),
        last_name: format!("Last{handle}"),
        phone_number: Some("+998901234567".to_string()),
        email: format!("{handle}@x.com"),
        gender: None,
        username: handle.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        profile_image_url: None,
        role: UserRole::User,
    }
}

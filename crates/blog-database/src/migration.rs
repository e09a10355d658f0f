//! Embedded schema migrations.
//!
//! The SQL under `migrations/` at the workspace root is compiled into the
//! binary; applied versions are tracked in `_sqlx_migrations`.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use blog_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every blog migration not yet recorded in the store.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let known = MIGRATOR.iter().count();
    info!(known, "Applying blog schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    info!("Blog schema is up to date");
    Ok(())
}

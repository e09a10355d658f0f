//! Blog server entry point.
//!
//! Opens the single database pool, applies migrations, builds the storage
//! facade, and holds it until shutdown. HTTP handlers receive the facade
//! as an `Arc<dyn blog_database::Storage>`.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use blog_core::config::AppConfig;
use blog_core::error::AppError;
use blog_database::{DatabasePool, PgStorage};

/// Blog storage server
#[derive(Debug, Parser)]
#[command(name = "blog-server", version, about, long_about = None)]
struct Args {
    /// Configuration overlay to merge over `config/default.toml`
    #[arg(short, long, env = "BLOG_ENV", default_value = "development")]
    env: String,

    /// Apply migrations and exit
    #[arg(long)]
    migrate_only: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load(&args.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, args.migrate_only).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig, migrate_only: bool) -> Result<(), AppError> {
    tracing::info!("Starting blog-server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations || migrate_only {
        blog_database::migration::run_migrations(db.pool()).await?;
    }

    if migrate_only {
        db.close().await;
        return Ok(());
    }

    // ── Step 2: Storage facade ───────────────────────────────────
    let storage = Arc::new(PgStorage::new(db));
    if !storage.health_check().await? {
        storage.close().await;
        return Err(AppError::database("Database health check returned an unexpected value"));
    }

    tracing::info!("Storage ready; waiting for shutdown signal");

    // ── Step 3: Shutdown ─────────────────────────────────────────
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutdown signal received");
    storage.close().await;
    tracing::info!("Server shut down gracefully");
    Ok(())
}

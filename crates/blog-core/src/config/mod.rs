//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod database;
pub mod logging;

use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and `BLOG__`-prefixed environment variables (`BLOG__DATABASE__URL`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        Self::build(file_sources(dir, env).add_source(
            config::Environment::with_prefix("BLOG")
                .separator("__")
                .try_parsing(true),
        ))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// `{dir}/default` overlaid with `{dir}/{env}`; both optional.
fn file_sources(dir: &str, env: &str) -> ConfigBuilder<DefaultState> {
    config::Config::builder()
        .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
        .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
}

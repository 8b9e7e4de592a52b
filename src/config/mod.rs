//! Configuration management.

/// Database configuration and connection management
pub mod database;

/// Initial employee seeding from config.toml
pub mod seed;

use crate::errors::Result;

/// Top-level application configuration, assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database URL (`DATABASE_URL`)
    pub database_url: String,
    /// Address the HTTP API binds to (`BIND_ADDR`)
    pub bind_addr: String,
    /// Path to the employee seed file (`SEED_PATH`), if seeding is wanted
    pub seed_path: Option<String>,
}

/// Loads the application configuration from the environment.
///
/// `DATABASE_URL` and `BIND_ADDR` fall back to local defaults; `SEED_PATH`
/// is optional and seeding is skipped when unset.
pub fn load_app_configuration() -> Result<AppConfig> {
    Ok(AppConfig {
        database_url: database::get_database_url(),
        bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        seed_path: std::env::var("SEED_PATH").ok(),
    })
}

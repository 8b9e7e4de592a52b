//! milldesk server binary - wires configuration, database, and the HTTP API.

use dotenvy::dotenv;
use milldesk::{
    api::{self, AppState},
    config,
    errors::Result,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!(bind_addr = %app_config.bind_addr, "loaded application configuration");

    // 4. Initialize the database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Seed initial employees when a seed file is configured
    if let Some(seed_path) = &app_config.seed_path {
        let seed = config::seed::load_config(seed_path)?;
        let created = config::seed::seed_employees(&db, &seed).await?;
        info!(created, seed_path, "employee seeding complete");
    }

    // 6. Serve the HTTP API
    let state = Arc::new(AppState { db });
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    info!(addr = %app_config.bind_addr, "milldesk listening");
    axum::serve(listener, app).await?;

    Ok(())
}

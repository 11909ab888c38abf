//! # Artist Registry
//!
//! A comic artist registry CRUD API backed by SQLite.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use artist_registry::config::Settings;
use artist_registry::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    artist_registry::telemetry::init_tracing();

    info!("Starting Artist Registry...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}

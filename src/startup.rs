//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{CorsSettings, Settings};
use crate::infrastructure::database;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool and bring the schema up to date
        let db = database::create_pool(&settings.database).await?;
        database::run_migrations(&db).await?;
        tracing::info!("Database ready at {}", settings.database.connection_url());

        health::init_server_start();

        let state = AppState {
            db,
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&settings.cors));

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Create CORS layer from settings
///
/// An empty origin list means any origin is accepted.
fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(std::time::Duration::from_secs(3600))
    }
}

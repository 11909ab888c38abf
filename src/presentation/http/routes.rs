//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/artists", artist_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Artist resource routes
///
/// The update route takes no path parameter; the target id travels in the
/// request body.
fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::artist::create_artist))
        .route("/", get(handlers::artist::list_artists))
        .route("/", put(handlers::artist::update_artist))
        .route("/{user_id}", get(handlers::artist::get_artist))
        .route("/{user_id}", delete(handlers::artist::delete_artist))
}

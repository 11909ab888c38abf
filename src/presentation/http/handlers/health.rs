//! Health Check Handlers
//!
//! Provides health check endpoints for Kubernetes-style liveness and readiness probes.
//!
//! # Endpoints
//! - `GET /health` - Basic health check (is the server running?)
//! - `GET /health/ready` - Readiness probe (can the server accept traffic?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::startup::AppState;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed health check response
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

/// Individual service health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ServiceHealth,
}

/// Health status for individual services
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe - checks if the server can accept traffic
/// Returns 200 if ready, 503 if the database is unavailable
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = SERVER_START.elapsed().as_secs();

    let db_health = check_database(&state).await;
    let overall_status = determine_overall_status(&db_health);

    let response = DetailedHealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime,
        checks: HealthChecks {
            database: db_health,
        },
    };

    // Return 503 if unhealthy
    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Check database connectivity and latency
async fn check_database(state: &AppState) -> ServiceHealth {
    let start = Instant::now();
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => {
            let latency = start.elapsed().as_millis() as u64;
            ServiceHealth {
                status: if latency < 100 {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Degraded
                },
                latency_ms: Some(latency),
                message: None,
            }
        }
        Err(e) => ServiceHealth {
            status: HealthStatus::Unhealthy,
            latency_ms: None,
            message: Some(format!("Database connection failed: {}", e)),
        },
    }
}

/// Determine overall health based on individual checks
fn determine_overall_status(db: &ServiceHealth) -> HealthStatus {
    match db.status {
        HealthStatus::Unhealthy => HealthStatus::Unhealthy,
        HealthStatus::Degraded => HealthStatus::Degraded,
        HealthStatus::Healthy => HealthStatus::Healthy,
    }
}

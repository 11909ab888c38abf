//! Application Error Types
//!
//! Centralized error handling with Axum integration.
//!
//! Every client-visible failure renders as a JSON object with a single
//! `error` key; persistence failures are logged in full but surface only
//! a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be decoded as JSON of the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// One or more required payload fields are absent or empty. Carries the
    /// comma-joined field names, in declared field order.
    #[error("Missing keys: {0}")]
    MissingFields(String),

    /// A path or body id token is not a valid non-negative integer.
    #[error("Invalid artist id: {0}")]
    InvalidIdentifier(String),

    /// The targeted row does not exist (update/delete only).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store itself failed; treated as fatal for the request.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_)
            | AppError::MissingFields(_)
            | AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode, response::Response, Router};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use artist_registry::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use artist_registry::presentation::http::routes;
use artist_registry::startup::AppState;

/// Test application builder
///
/// Wires the real router to a migrated in-memory SQLite database, so every
/// test starts from an empty store and ids count from 1.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by an in-memory database
    pub async fn new() -> Self {
        // One connection that never expires; each `:memory:` connection
        // would otherwise open its own blank database.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database should open");

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .expect("migrations should apply");

        let state = AppState {
            db,
            settings: Arc::new(test_settings()),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with an explicit content type
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", content_type)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Create an artist through the API, returning the assigned id
    pub async fn create_artist(&self, payload: &serde_json::Value) -> i64 {
        let response = self.post_json("/artists", &payload.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        response_json(response)
            .await
            .as_i64()
            .expect("create should respond with a bare id")
    }
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 5,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".to_string(),
    }
}

/// Read a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn response_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Generate a create payload with plausible artist data
pub fn artist_payload() -> serde_json::Value {
    let birth_year: i32 = (1940..2006).fake();
    json!({
        "first_name": FirstName().fake::<String>(),
        "last_name": LastName().fake::<String>(),
        "birth_year": birth_year.to_string(),
    })
}

/// Fixed payload for tests that assert on stored values
pub fn known_payload() -> serde_json::Value {
    json!({
        "first_name": "Hergé",
        "last_name": "Remi",
        "birth_year": "1907",
    })
}

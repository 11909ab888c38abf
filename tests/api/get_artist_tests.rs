//! Get Artist API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{artist_payload, known_payload, response_json, TestApp};

/// Test fetching a stored artist returns its tuple
#[tokio::test]
async fn test_get_artist_returns_stored_tuple() {
    // Arrange
    let app = TestApp::new().await;
    let id = app.create_artist(&known_payload()).await;

    // Act
    let response = app.get(&format!("/artists/{}", id)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!([1, "Hergé", "Remi", "1907"])
    );
}

/// Test an unknown id responds 200 with the placeholder tuple
#[tokio::test]
async fn test_get_artist_unknown_id_returns_placeholder() {
    // Arrange
    let app = TestApp::new().await;

    // Act
    let response = app.get("/artists/9999").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!([9999, "Random", "Artist", "1900"])
    );
}

/// Test id zero is never allocated and yields the placeholder
#[tokio::test]
async fn test_get_artist_zero_returns_placeholder() {
    // Arrange
    let app = TestApp::new().await;
    app.create_artist(&artist_payload()).await;

    // Act
    let response = app.get("/artists/0").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!([0, "Random", "Artist", "1900"])
    );
}

/// Test a deleted id yields the placeholder
#[tokio::test]
async fn test_get_artist_deleted_id_returns_placeholder() {
    // Arrange
    let app = TestApp::new().await;
    let id = app.create_artist(&artist_payload()).await;
    app.delete(&format!("/artists/{}", id)).await;

    // Act
    let response = app.get(&format!("/artists/{}", id)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!([id, "Random", "Artist", "1900"])
    );
}

/// Test a non-numeric id token responds 400 with an error body
#[tokio::test]
async fn test_get_artist_invalid_token_returns_bad_request() {
    // Arrange
    let app = TestApp::new().await;

    // Act
    let response = app.get("/artists/invalid_id").await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body.get("error").is_some());
}

/// Test a token that does not percent-decode responds 400 with an error body
#[tokio::test]
async fn test_get_artist_undecodable_token_returns_error_body() {
    // Arrange
    let app = TestApp::new().await;

    // Act
    let response = app.get("/artists/%ff").await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body.get("error").is_some());
}

/// Test a negative id token responds 400
#[tokio::test]
async fn test_get_artist_negative_token_returns_bad_request() {
    // Arrange
    let app = TestApp::new().await;

    // Act
    let response = app.get("/artists/-1").await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Test a trailing-garbage token responds 400 rather than truncating
#[tokio::test]
async fn test_get_artist_partial_numeric_token_returns_bad_request() {
    // Arrange
    let app = TestApp::new().await;
    app.create_artist(&artist_payload()).await;

    // Act
    let response = app.get("/artists/1abc").await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

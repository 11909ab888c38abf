//! Artist Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::dto::request::{CreateArtistRequest, UpdateArtistRequest};
use crate::application::dto::response::ArtistResponse;
use crate::domain::{Artist, ArtistRepository};
use crate::infrastructure::repositories::SqliteArtistRepository;
use crate::presentation::http::extractors::{JsonBody, PathToken};
use crate::shared::error::AppError;
use crate::shared::validation;
use crate::startup::AppState;

/// Create a new artist
///
/// Responds with the assigned id as a bare JSON number.
pub async fn create_artist(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateArtistRequest>,
) -> Result<Json<i64>, AppError> {
    let fields = body.into_fields()?;

    let repo = SqliteArtistRepository::new(state.db.clone());
    let user_id = repo.create(&fields).await?;

    Ok(Json(user_id))
}

/// List all artists in insertion order
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtistResponse>>, AppError> {
    let repo = SqliteArtistRepository::new(state.db.clone());
    let artists = repo.list_all().await?;

    Ok(Json(artists.into_iter().map(ArtistResponse::from).collect()))
}

/// Get an artist by id
///
/// An id that parses but matches no row yields the placeholder artist
/// instead of a 404.
pub async fn get_artist(
    State(state): State<AppState>,
    PathToken(user_id): PathToken,
) -> Result<Json<ArtistResponse>, AppError> {
    let user_id = validation::parse_artist_id(&user_id)?;

    let repo = SqliteArtistRepository::new(state.db.clone());
    let artist = repo
        .find_by_id(user_id)
        .await?
        .unwrap_or_else(|| Artist::placeholder(user_id));

    Ok(Json(ArtistResponse::from(artist)))
}

/// Update an artist
///
/// The target id travels in the body as `user_id`. Responds 200 with an
/// empty body on success.
pub async fn update_artist(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UpdateArtistRequest>,
) -> Result<StatusCode, AppError> {
    let (user_id, fields) = body.into_parts()?;

    let repo = SqliteArtistRepository::new(state.db.clone());
    repo.update(user_id, &fields).await?;

    Ok(StatusCode::OK)
}

/// Delete an artist
///
/// Responds 200 with an empty body on success.
pub async fn delete_artist(
    State(state): State<AppState>,
    PathToken(user_id): PathToken,
) -> Result<StatusCode, AppError> {
    let user_id = validation::parse_artist_id(&user_id)?;

    let repo = SqliteArtistRepository::new(state.db.clone());
    repo.delete(user_id).await?;

    Ok(StatusCode::OK)
}

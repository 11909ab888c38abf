//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// The stock `Json` extractor rejects with a plain-text 4xx body; this
/// wrapper folds every decode failure (wrong content type, truncated or
/// invalid JSON, type mismatch) into the crate's `{"error": ...}` shape
/// with status 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::MalformedBody(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}

/// Path id extractor whose rejection is an [`AppError`].
///
/// Routes capture the id as raw text so integer syntax and range policy
/// stay in `validation::parse_artist_id`; a token the router cannot even
/// decode (broken percent-encoding, for instance) must still answer with
/// the `{"error": ...}` shape rather than the stock plain-text rejection.
#[derive(Debug)]
pub struct PathToken(pub String);

impl<S> FromRequestParts<S> for PathToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(token) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                AppError::InvalidIdentifier(rejection.body_text())
            })?;

        Ok(PathToken(token))
    }
}

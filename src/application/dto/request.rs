//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Payloads deserialize into `Option` fields so that an absent key, an
//! explicit `null` and an empty string all funnel into the same missing-keys
//! report instead of a serde type error. Unknown keys are dropped during
//! deserialization; only the declared fields are projected forward.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::ArtistFields;
use crate::shared::error::AppError;
use crate::shared::validation;

/// An id carried in a request body, either as a JSON string (the form the
/// original clients send) or as a non-negative JSON integer.
///
/// Serializes untagged to the bare value; the `required` rule on
/// [`UpdateArtistRequest::user_id`] records the field value in its error
/// params, so the type must serialize even though responses never carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdToken {
    Number(i64),
    Text(String),
}

impl IdToken {
    /// Resolve the token to a row id.
    ///
    /// Negative numbers and non-numeric text fail with
    /// [`AppError::InvalidIdentifier`]; existence of the row is not checked.
    pub fn as_artist_id(&self) -> Result<i64, AppError> {
        match self {
            IdToken::Number(n) if *n >= 0 => Ok(*n),
            IdToken::Number(n) => Err(AppError::InvalidIdentifier(n.to_string())),
            IdToken::Text(token) => validation::parse_artist_id(token),
        }
    }
}

/// Create artist request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtistRequest {
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub birth_year: Option<String>,
}

impl CreateArtistRequest {
    /// Required keys in declared order, used for the missing-keys message.
    pub const REQUIRED_KEYS: &'static [&'static str] =
        &["first_name", "last_name", "birth_year"];

    /// Validate the payload and project it into the three known fields.
    pub fn into_fields(self) -> Result<ArtistFields, AppError> {
        self.validate()
            .map_err(|e| validation::missing_keys(&e, Self::REQUIRED_KEYS))?;

        Ok(ArtistFields {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            birth_year: self.birth_year.unwrap_or_default(),
        })
    }
}

/// Update artist request; `user_id` names the target row and is itself
/// required.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateArtistRequest {
    #[validate(required)]
    pub user_id: Option<IdToken>,

    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub birth_year: Option<String>,
}

impl UpdateArtistRequest {
    /// Required keys in declared order, used for the missing-keys message.
    pub const REQUIRED_KEYS: &'static [&'static str] =
        &["user_id", "first_name", "last_name", "birth_year"];

    /// Validate the payload, then resolve the target id and project the
    /// updatable fields.
    ///
    /// Key presence is checked first so a request missing both `user_id` and
    /// a name field reports every missing key at once; an unparsable id
    /// token is only reported once the payload shape is otherwise sound.
    pub fn into_parts(self) -> Result<(i64, ArtistFields), AppError> {
        self.validate()
            .map_err(|e| validation::missing_keys(&e, Self::REQUIRED_KEYS))?;

        let Self {
            user_id,
            first_name,
            last_name,
            birth_year,
        } = self;

        let user_id = user_id
            .ok_or_else(|| AppError::MissingFields("user_id".to_string()))?
            .as_artist_id()?;

        Ok((
            user_id,
            ArtistFields {
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
                birth_year: birth_year.unwrap_or_default(),
            },
        ))
    }
}

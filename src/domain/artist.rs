//! Artist entity and repository trait.
//!
//! Maps to the `artists` table in the database schema.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// First name reported for an id that has no row.
pub const PLACEHOLDER_FIRST_NAME: &str = "Random";

/// Last name reported for an id that has no row.
pub const PLACEHOLDER_LAST_NAME: &str = "Artist";

/// Birth year reported for an id that has no row.
pub const PLACEHOLDER_BIRTH_YEAR: &str = "1900";

/// Represents one registered comic artist.
///
/// Maps to the `artists` table:
/// - user_id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - first_name: TEXT NOT NULL, non-empty
/// - last_name: TEXT NOT NULL, non-empty
/// - birth_year: TEXT NOT NULL, non-empty (a year kept as an opaque string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Store-assigned id, strictly increasing and never reused
    pub user_id: i64,

    /// Artist's first name
    pub first_name: String,

    /// Artist's last name
    pub last_name: String,

    /// Artist's birth year, as supplied by the client
    pub birth_year: String,
}

impl Artist {
    /// The placeholder artist reported for an id with no backing row.
    ///
    /// `GET` on a missing id answers 200 with this value instead of 404;
    /// update and delete still treat the same id as not-found. The
    /// asymmetry is part of the published contract.
    pub fn placeholder(user_id: i64) -> Self {
        Self {
            user_id,
            first_name: PLACEHOLDER_FIRST_NAME.to_string(),
            last_name: PLACEHOLDER_LAST_NAME.to_string(),
            birth_year: PLACEHOLDER_BIRTH_YEAR.to_string(),
        }
    }
}

/// The three client-supplied artist fields, validated and projected out of a
/// request payload. Construction goes through the request DTOs, so a value of
/// this type always holds non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistFields {
    pub first_name: String,
    pub last_name: String,
    pub birth_year: String,
}

/// Repository trait for Artist data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Insert a new artist and return the id the store allocated for it.
    ///
    /// Ids come from the table's own sequence: always one greater than the
    /// highest id ever issued, even when earlier rows have been deleted.
    async fn create(&self, fields: &ArtistFields) -> Result<i64, AppError>;

    /// Return every artist in insertion order. An empty table yields an
    /// empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<Artist>, AppError>;

    /// Find an artist by id. Returns `None` if no such row exists.
    async fn find_by_id(&self, user_id: i64) -> Result<Option<Artist>, AppError>;

    /// Overwrite the three client fields of an existing row; `user_id`
    /// itself is immutable. Fails with `NotFound` if the row is absent.
    async fn update(&self, user_id: i64, fields: &ArtistFields) -> Result<(), AppError>;

    /// Remove a row permanently. Fails with `NotFound` if the row is
    /// absent; the freed id is never reassigned.
    async fn delete(&self, user_id: i64) -> Result<(), AppError>;
}

//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::Artist;

/// Artist response, serialized as a positional JSON array:
/// `[user_id, first_name, last_name, birth_year]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistResponse(pub i64, pub String, pub String, pub String);

impl From<Artist> for ArtistResponse {
    fn from(artist: Artist) -> Self {
        Self(
            artist.user_id,
            artist.first_name,
            artist.last_name,
            artist.birth_year,
        )
    }
}

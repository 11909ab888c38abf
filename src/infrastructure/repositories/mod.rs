//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.

pub mod artist_repository;

pub use artist_repository::SqliteArtistRepository;

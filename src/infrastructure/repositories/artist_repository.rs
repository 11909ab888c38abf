//! Artist Repository Implementation
//!
//! SQLite implementation of the ArtistRepository trait.
//! Maps between the database schema and domain Artist entity.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{Artist, ArtistFields, ArtistRepository};
use crate::shared::error::AppError;

/// Database row representation matching the artists table schema.
#[derive(Debug, sqlx::FromRow)]
struct ArtistRow {
    user_id: i64,
    first_name: String,
    last_name: String,
    birth_year: String,
}

impl ArtistRow {
    /// Convert database row to domain Artist entity.
    fn into_artist(self) -> Artist {
        Artist {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_year: self.birth_year,
        }
    }
}

/// SQLite artist repository implementation.
///
/// Provides CRUD operations for artists against a SQLite database.
/// Row ids come from the table's AUTOINCREMENT column, so deleted ids
/// are never handed out again.
#[derive(Clone)]
pub struct SqliteArtistRepository {
    pool: SqlitePool,
}

impl SqliteArtistRepository {
    /// Create a new SqliteArtistRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistRepository for SqliteArtistRepository {
    /// Insert a new artist and return the assigned row id.
    async fn create(&self, fields: &ArtistFields) -> Result<i64, AppError> {
        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO artists (first_name, last_name, birth_year)
            VALUES (?, ?, ?)
            RETURNING user_id
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.birth_year)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_id)
    }

    /// List every artist in insertion order.
    async fn list_all(&self) -> Result<Vec<Artist>, AppError> {
        let rows = sqlx::query_as::<_, ArtistRow>(
            r#"
            SELECT user_id, first_name, last_name, birth_year
            FROM artists
            ORDER BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_artist()).collect())
    }

    /// Find an artist by row id.
    async fn find_by_id(&self, user_id: i64) -> Result<Option<Artist>, AppError> {
        let row = sqlx::query_as::<_, ArtistRow>(
            r#"
            SELECT user_id, first_name, last_name, birth_year
            FROM artists
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_artist()))
    }

    /// Replace every stored field of an existing artist.
    async fn update(&self, user_id: i64, fields: &ArtistFields) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE artists
            SET first_name = ?,
                last_name = ?,
                birth_year = ?
            WHERE user_id = ?
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.birth_year)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Artist with id {} not found",
                user_id
            )));
        }

        Ok(())
    }

    /// Delete an artist (hard delete).
    async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM artists WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Artist with id {} not found",
                user_id
            )));
        }

        Ok(())
    }
}

//! Repository for the `artists` table.

use fyyur_core::search::contains_pattern;
use fyyur_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{
    Artist, ArtistName, ArtistShow, ArtistSummary, CreateArtist, UpdateArtist,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
     website, seeking_venue, seeking_description, \
     upcoming_shows_count, past_shows_count, created_at, updated_at";

/// Provides CRUD and search queries for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row. Counters start at zero.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link,
                                  website, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(input.genres.to_delimited())
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// `(id, name)` of every artist in insertion order.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<ArtistName>, sqlx::Error> {
        sqlx::query_as::<_, ArtistName>("SELECT id, name FROM artists ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created artists, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT id, name, upcoming_shows_count FROM artists ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on `name`. An empty term matches all artists.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists
             WHERE name ILIKE $1 ESCAPE '\\'
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable field of an artist. Counters are untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                seeking_venue = $10,
                seeking_description = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(input.genres.to_delimited())
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist together with all of their shows, in one transaction.
    ///
    /// Returns the number of shows removed, or `None` if no artist with the
    /// given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Conflicts with the KEY SHARE lock a booking's FK check takes, so
        // in-flight bookings finish first and later ones see the row gone.
        let locked =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM artists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let shows = sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(artist_id = id, shows, "Artist deleted with their shows");
        Ok(Some(shows))
    }

    /// Every show by an artist joined to its venue, ordered by start time.
    pub async fn list_shows(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.id AS show_id, v.id AS venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time, s.upcoming
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}

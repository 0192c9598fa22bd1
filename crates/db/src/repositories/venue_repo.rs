//! Repository for the `venues` table.

use fyyur_core::area::{group_by_area, Area};
use fyyur_core::search::contains_pattern;
use fyyur_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{
    CreateVenue, UpdateVenue, Venue, VenueAreaRow, VenueShow, VenueSummary,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
     genres, website, seeking_talent, seeking_description, \
     upcoming_shows_count, past_shows_count, created_at, updated_at";

/// Provides CRUD, search and grouping queries for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row. Counters start at zero.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                 genres, website, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.genres.to_delimited())
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all venues in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues ORDER BY id ASC");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// The `limit` most recently created venues, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT id, name, upcoming_shows_count FROM venues ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// All venues grouped by their distinct (city, state) pairs.
    pub async fn list_by_area(pool: &PgPool) -> Result<Vec<Area<VenueSummary>>, sqlx::Error> {
        let rows = sqlx::query_as::<_, VenueAreaRow>(
            "SELECT city, state, id, name, upcoming_shows_count
             FROM venues
             ORDER BY state, city, id",
        )
        .fetch_all(pool)
        .await?;

        Ok(group_by_area(
            rows.into_iter().map(|row| (row.city, row.state, row.summary)),
        ))
    }

    /// Case-insensitive substring search on `name`. An empty term matches all venues.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM venues
             WHERE name ILIKE $1 ESCAPE '\\'
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable field of a venue. Counters are untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                facebook_link = $8,
                genres = $9,
                website = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.genres.to_delimited())
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue together with all of its shows, in one transaction.
    ///
    /// Returns the number of shows removed, or `None` if no venue with the
    /// given `id` exists. Counters on the affected artists are left as-is.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Conflicts with the KEY SHARE lock a booking's FK check takes, so
        // in-flight bookings finish first and later ones see the row gone.
        let locked =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM venues WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let shows = sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(venue_id = id, shows, "Venue deleted with its shows");
        Ok(Some(shows))
    }

    /// Every show at a venue joined to its artist, ordered by start time.
    pub async fn list_shows(pool: &PgPool, venue_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.id AS show_id, a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time, s.upcoming
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }
}

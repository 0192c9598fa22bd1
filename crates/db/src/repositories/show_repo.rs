//! Repository for the `shows` table, including counter maintenance.
//!
//! Booking a show is the only write that touches three tables: the show
//! insert plus one counter increment on each of its venue and artist, all
//! in one transaction. Increments are server-side (`count = count + 1`).

use fyyur_core::show::{classify, ShowCounter};
use fyyur_core::types::{DbId, ShowTime};
use sqlx::{PgConnection, PgPool};

use crate::models::show::{CreateShow, Show, ShowSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, start_time, artist_id, venue_id, upcoming, created_at, updated_at";

/// Provides booking and listing queries for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Book a show.
    ///
    /// The show is classified against `now`, inserted, and the matching
    /// counter on its venue and artist incremented, all in one transaction.
    /// A missing artist or venue surfaces as a foreign key violation and
    /// leaves no trace.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShow,
        now: ShowTime,
    ) -> Result<Show, sqlx::Error> {
        let upcoming = classify(input.start_time, now);

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO shows (start_time, artist_id, venue_id, upcoming)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(input.start_time)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(upcoming)
            .fetch_one(&mut *tx)
            .await?;

        record_show_created(&mut *tx, &show).await?;

        tx.commit().await?;
        Ok(show)
    }

    /// Find a show by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Shows whose stored `upcoming` flag is set, joined to venue and artist.
    pub async fn list_upcoming(pool: &PgPool) -> Result<Vec<ShowSummary>, sqlx::Error> {
        sqlx::query_as::<_, ShowSummary>(
            "SELECT s.id AS show_id,
                    v.id AS venue_id, v.name AS venue_name,
                    a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             WHERE s.upcoming
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}

/// Increment the counter matching `show.upcoming` on the show's venue and
/// artist by exactly one.
///
/// Must run on the connection holding the transaction that inserted
/// `show`. Fails with [`sqlx::Error::RowNotFound`] if either parent row is
/// gone, which rolls the booking back when the caller propagates it.
pub async fn record_show_created(conn: &mut PgConnection, show: &Show) -> Result<(), sqlx::Error> {
    let column = ShowCounter::for_show(show.upcoming).column();

    for (table, id) in [("venues", show.venue_id), ("artists", show.artist_id)] {
        let query = format!(
            "UPDATE {table} SET {column} = {column} + 1 WHERE id = $1 RETURNING id"
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
    }

    tracing::debug!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        counter = column,
        "Show counters incremented",
    );
    Ok(())
}

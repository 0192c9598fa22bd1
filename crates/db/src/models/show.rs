//! Show entity model and DTOs.

use fyyur_core::show_time::serialize_wire;
use fyyur_core::types::{DbId, ShowTime, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A show row from the `shows` table.
///
/// `upcoming` is classified once at booking time and never re-evaluated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    #[serde(serialize_with = "serialize_wire")]
    pub start_time: ShowTime,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub upcoming: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for booking a show. `start_time` is already parsed.
#[derive(Debug, Clone)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: ShowTime,
}

/// A show joined to both its venue and artist, for the shows listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowSummary {
    pub show_id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(serialize_with = "serialize_wire")]
    pub start_time: ShowTime,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_display: Option<String>,
}

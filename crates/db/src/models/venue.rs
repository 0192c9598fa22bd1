//! Venue entity model and DTOs.

use fyyur_core::genres::{serialize_delimited, Genres};
use fyyur_core::types::{DbId, ShowTime, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A venue row from the `venues` table.
///
/// `upcoming_shows_count` / `past_shows_count` are cached counters bumped
/// once per booked show. They are never decremented.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    /// Stored comma-delimited; serialized as a list.
    #[serde(serialize_with = "serialize_delimited")]
    pub genres: String,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub upcoming_shows_count: i32,
    pub past_shows_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Venue {
    pub fn genres(&self) -> Genres {
        Genres::from_delimited(&self.genres)
    }
}

/// DTO for creating a venue.
///
/// Also used for edits, which overwrite every field listed here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(length(min = 1, max = 120))]
    pub state: String,
    #[validate(length(min = 1, max = 120))]
    pub address: String,
    #[validate(length(min = 1, max = 120))]
    pub phone: String,
    #[validate(length(max = 500))]
    pub image_link: Option<String>,
    #[validate(length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub genres: Genres,
    #[validate(length(max = 120))]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Edits replace the whole editable record.
pub type UpdateVenue = CreateVenue;

/// `(id, name, upcoming_shows_count)` projection used by area listings,
/// search results and the home page.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub upcoming_shows_count: i32,
}

impl From<&Venue> for VenueSummary {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name.clone(),
            upcoming_shows_count: venue.upcoming_shows_count,
        }
    }
}

/// A venue summary tagged with its location, before grouping into areas.
#[derive(Debug, Clone, FromRow)]
pub struct VenueAreaRow {
    pub city: String,
    pub state: String,
    #[sqlx(flatten)]
    pub summary: VenueSummary,
}

/// A show at a venue, joined to the performing artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub show_id: DbId,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(serialize_with = "fyyur_core::show_time::serialize_wire")]
    pub start_time: ShowTime,
    #[serde(skip)]
    pub upcoming: bool,
    /// Filled in by the HTTP layer when a display format is requested.
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_display: Option<String>,
}

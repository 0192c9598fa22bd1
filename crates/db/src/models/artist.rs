//! Artist entity model and DTOs.

use fyyur_core::genres::{serialize_delimited, Genres};
use fyyur_core::types::{DbId, ShowTime, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An artist row from the `artists` table.
///
/// Carries the same cached show counters as [`super::venue::Venue`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    #[serde(serialize_with = "serialize_delimited")]
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub upcoming_shows_count: i32,
    pub past_shows_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Artist {
    pub fn genres(&self) -> Genres {
        Genres::from_delimited(&self.genres)
    }
}

/// DTO for creating an artist. Edits reuse it and overwrite every field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(length(min = 1, max = 120))]
    pub state: String,
    #[validate(length(min = 1, max = 120))]
    pub phone: String,
    #[serde(default)]
    pub genres: Genres,
    #[validate(length(max = 500))]
    pub image_link: Option<String>,
    #[validate(length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(length(max = 120))]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

pub type UpdateArtist = CreateArtist;

/// `(id, name)` projection for the artist listing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArtistName {
    pub id: DbId,
    pub name: String,
}

/// `(id, name, upcoming_shows_count)` projection for search and the home page.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub upcoming_shows_count: i32,
}

impl From<&Artist> for ArtistSummary {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            upcoming_shows_count: artist.upcoming_shows_count,
        }
    }
}

/// A show by an artist, joined to the hosting venue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub show_id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[serde(serialize_with = "fyyur_core::show_time::serialize_wire")]
    pub start_time: ShowTime,
    #[serde(skip)]
    pub upcoming: bool,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_display: Option<String>,
}

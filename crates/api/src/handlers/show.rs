//! Handlers for the `/shows` resource.
//!
//! Shows are only ever booked and listed here; there is no edit or delete.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::show_time::{format_show_time, parse_start_time};
use fyyur_core::types::{DbId, ShowTime};
use fyyur_db::models::show::{CreateShow, Show, ShowSummary};
use fyyur_db::repositories::ShowRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::TimeFormatParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Booking request body. `start_time` is `YYYY-MM-DD HH:MM:SS` or ISO-8601.
#[derive(Debug, Deserialize)]
pub struct BookShowRequest {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: String,
}

/// Current wall-clock time, used to classify new bookings.
fn local_now() -> ShowTime {
    chrono::Local::now().naive_local()
}

/// POST /api/v1/shows
///
/// Classifies the show against the current clock and bumps the matching
/// counter on its venue and artist in the same transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BookShowRequest>,
) -> AppResult<(StatusCode, Json<Show>)> {
    let booking = CreateShow {
        artist_id: input.artist_id,
        venue_id: input.venue_id,
        start_time: parse_start_time(&input.start_time)?,
    };

    let show = ShowRepo::create(&state.pool, &booking, local_now()).await?;

    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        upcoming = show.upcoming,
        "Show listed",
    );

    Ok((StatusCode::CREATED, Json(show)))
}

/// GET /api/v1/shows
///
/// Shows flagged upcoming at booking time.
pub async fn list_upcoming(
    State(state): State<AppState>,
    Query(params): Query<TimeFormatParams>,
) -> AppResult<Json<DataResponse<Vec<ShowSummary>>>> {
    let format = params.display_format()?;

    let mut shows = ShowRepo::list_upcoming(&state.pool).await?;
    if let Some(format) = format {
        for show in &mut shows {
            show.start_time_display = Some(format_show_time(show.start_time, format));
        }
    }

    Ok(Json(DataResponse { data: shows }))
}

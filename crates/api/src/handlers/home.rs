//! Landing page data: the most recently listed venues and artists.

use axum::extract::State;
use axum::Json;
use fyyur_db::models::artist::ArtistSummary;
use fyyur_db::models::venue::VenueSummary;
use fyyur_db::repositories::{ArtistRepo, VenueRepo, RECENT_LIMIT};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecentListings {
    pub venues: Vec<VenueSummary>,
    pub artists: Vec<ArtistSummary>,
}

/// GET /api/v1/recent
pub async fn recent(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<RecentListings>>> {
    let venues = VenueRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let artists = ArtistRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    Ok(Json(DataResponse {
        data: RecentListings { venues, artists },
    }))
}

//! Handlers for the `/venues` resource.
//!
//! Besides CRUD this covers the area listing (venues grouped by city and
//! state), name search, and the venue detail page with its past and
//! upcoming shows.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::area::Area;
use fyyur_core::error::CoreError;
use fyyur_core::show::ShowTimeline;
use fyyur_core::show_time::format_show_time;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueShow, VenueSummary};
use fyyur_db::repositories::VenueRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::SearchRequest;
use crate::query::TimeFormatParams;
use crate::response::{DataResponse, SearchResult};
use crate::state::AppState;

/// Venue detail page: the venue's own fields plus its shows split into
/// past and upcoming by their stored flag.
///
/// The counts inside the timeline are computed from the joined rows and
/// may differ from the cached counters on the venue row.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowTimeline<VenueShow>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Venue",
        id,
    })
}

/// Build the detail view for one venue.
pub async fn assemble_venue_detail(
    pool: &sqlx::PgPool,
    id: DbId,
    params: &TimeFormatParams,
) -> AppResult<VenueDetail> {
    let format = params.display_format()?;

    let venue = VenueRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut shows = VenueRepo::list_shows(pool, id).await?;
    if let Some(format) = format {
        for show in &mut shows {
            show.start_time_display = Some(format_show_time(show.start_time, format));
        }
    }

    Ok(VenueDetail {
        genres: venue.genres().into_inner(),
        id: venue.id,
        name: venue.name,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        shows: ShowTimeline::partition(shows, |show| show.upcoming),
    })
}

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    input.validate()?;
    let venue = VenueRepo::create(&state.pool, &input).await?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");

    Ok((StatusCode::CREATED, Json(venue)))
}

/// GET /api/v1/venues
///
/// All venues grouped by (city, state).
pub async fn list_by_area(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Area<VenueSummary>>>>> {
    let areas = VenueRepo::list_by_area(&state.pool).await?;
    Ok(Json(DataResponse { data: areas }))
}

/// POST /api/v1/venues/search
///
/// Case-insensitive substring match on name. An empty term returns every venue.
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<SearchResult<VenueSummary>>> {
    let venues = VenueRepo::search_by_name(&state.pool, &input.search_term).await?;
    let items = venues.iter().map(VenueSummary::from).collect();
    Ok(Json(SearchResult::new(items)))
}

/// GET /api/v1/venues/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<TimeFormatParams>,
) -> AppResult<Json<VenueDetail>> {
    let detail = assemble_venue_detail(&state.pool, id, &params).await?;
    Ok(Json(detail))
}

/// GET /api/v1/venues/{id}/edit
///
/// The editable record, used to pre-fill edit forms.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Venue>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(venue))
}

/// PUT /api/v1/venues/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<Json<Venue>> {
    input.validate()?;
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(venue_id = id, name = %venue.name, "Venue updated");

    Ok(Json(venue))
}

/// DELETE /api/v1/venues/{id}
///
/// Removes the venue and every show booked at it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let shows_removed = VenueRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(venue_id = id, shows_removed, "Venue deleted");

    Ok(StatusCode::NO_CONTENT)
}

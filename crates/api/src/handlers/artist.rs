//! Handlers for the `/artists` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_core::show::ShowTimeline;
use fyyur_core::show_time::format_show_time;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{
    Artist, ArtistName, ArtistShow, ArtistSummary, CreateArtist, UpdateArtist,
};
use fyyur_db::repositories::ArtistRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::SearchRequest;
use crate::query::TimeFormatParams;
use crate::response::{DataResponse, SearchResult};
use crate::state::AppState;

/// Artist detail page; mirrors [`super::venue::VenueDetail`] with shows
/// joined to their venues.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowTimeline<ArtistShow>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// Build the detail view for one artist.
pub async fn assemble_artist_detail(
    pool: &sqlx::PgPool,
    id: DbId,
    params: &TimeFormatParams,
) -> AppResult<ArtistDetail> {
    let format = params.display_format()?;

    let artist = ArtistRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut shows = ArtistRepo::list_shows(pool, id).await?;
    if let Some(format) = format {
        for show in &mut shows {
            show.start_time_display = Some(format_show_time(show.start_time, format));
        }
    }

    Ok(ArtistDetail {
        genres: artist.genres().into_inner(),
        id: artist.id,
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        shows: ShowTimeline::partition(shows, |show| show.upcoming),
    })
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    input.validate()?;
    let artist = ArtistRepo::create(&state.pool, &input).await?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");

    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /api/v1/artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ArtistName>>>> {
    let artists = ArtistRepo::list_names(&state.pool).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/artists/search
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<SearchResult<ArtistSummary>>> {
    let artists = ArtistRepo::search_by_name(&state.pool, &input.search_term).await?;
    let items = artists.iter().map(ArtistSummary::from).collect();
    Ok(Json(SearchResult::new(items)))
}

/// GET /api/v1/artists/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<TimeFormatParams>,
) -> AppResult<Json<ArtistDetail>> {
    let detail = assemble_artist_detail(&state.pool, id, &params).await?;
    Ok(Json(detail))
}

/// GET /api/v1/artists/{id}/edit
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artist>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    input.validate()?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(artist_id = id, name = %artist.name, "Artist updated");

    Ok(Json(artist))
}

/// DELETE /api/v1/artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let shows_removed = ArtistRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(artist_id = id, shows_removed, "Artist deleted");

    Ok(StatusCode::NO_CONTENT)
}

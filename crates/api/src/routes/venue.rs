//! Route definitions for venues.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /                 -> list_by_area
/// POST   /                 -> create
/// POST   /search           -> search
/// GET    /{id}             -> get_detail
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/edit        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list_by_area).post(venue::create))
        .route("/search", post(venue::search))
        .route(
            "/{id}",
            get(venue::get_detail)
                .put(venue::update)
                .delete(venue::delete),
        )
        .route("/{id}/edit", get(venue::get_by_id))
}

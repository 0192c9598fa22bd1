//! Route definitions for artists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// POST   /search           -> search
/// GET    /{id}             -> get_detail
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/edit        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list).post(artist::create))
        .route("/search", post(artist::search))
        .route(
            "/{id}",
            get(artist::get_detail)
                .put(artist::update)
                .delete(artist::delete),
        )
        .route("/{id}/edit", get(artist::get_by_id))
}

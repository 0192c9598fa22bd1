pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /recent                    most recent venues and artists
/// /venues                    see [`venue::router`]
/// /artists                   see [`artist::router`]
/// /shows                     see [`show::router`]
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/recent", get(handlers::home::recent))
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}

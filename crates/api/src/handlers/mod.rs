//! Request handlers for venues, artists and shows.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the matching repository in `fyyur_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;

use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Body of the venue and artist search endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Fallback for unmatched routes, in the same shape as other errors.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "code": "NOT_FOUND",
        })),
    )
}

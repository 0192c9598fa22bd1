//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always 200; a store that does not answer `SELECT 1` reports `degraded`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match fyyur_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Record store health check failed");
            false
        }
    };

    Json(HealthResponse::new(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

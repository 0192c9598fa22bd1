use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fyyur_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for storage.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::ConstraintViolation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "CONSTRAINT_VIOLATION",
                    msg.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key, not-null, check and data exceptions map to 422.
/// - Everything else is a storage failure: 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // foreign_key_violation
            Some("23503") => {
                tracing::warn!(error = %db_err, "Foreign key violation");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "CONSTRAINT_VIOLATION",
                    "Referenced record does not exist. Please make sure the ids are correct"
                        .to_string(),
                )
            }
            // not_null_violation, check_violation
            Some("23502") | Some("23514") => {
                tracing::warn!(error = %db_err, "Constraint violation");
                constraint_violation()
            }
            // class 22 data exceptions
            Some(c) if c.starts_with("22") => {
                tracing::warn!(error = %db_err, "Data exception");
                constraint_violation()
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal_error()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

fn constraint_violation() -> (StatusCode, &'static str, String) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        "CONSTRAINT_VIOLATION",
        "The request violates a data constraint".to_string(),
    )
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id: 7,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn constraint_violation_maps_to_422() {
        let response =
            AppError::Core(CoreError::ConstraintViolation("bad".into())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::Core(CoreError::Validation("bad".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn pool_failure_is_sanitized_500() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

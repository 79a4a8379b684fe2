use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure of a read or write against the alert store.
///
/// Never retried by the evaluator; the caller decides what the user sees.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("alert store unavailable: {0}")]
    Database(String),

    #[error("invalid alert: {0}")]
    Invalid(String),

    #[error("alert not found")]
    NotFound,
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::Database(e) => {
                tracing::error!(error = %e, "alert store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // driver detail stays in the log
        let message = match &self {
            StoreError::Database(_) => "alert store unavailable".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

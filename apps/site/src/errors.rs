use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream fetch failed: {0}")]
    FetchFailed(String),

    #[error("Malformed CV document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Preference store error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::FetchFailed(msg) => {
                tracing::error!("Upstream fetch failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_FETCH_FAILED",
                    "The CV document could not be fetched".to_string(),
                )
            }
            AppError::Document(e) => {
                tracing::error!("Malformed CV document: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_DOCUMENT",
                    "The CV document could not be parsed".to_string(),
                )
            }
            AppError::Network(e) => {
                tracing::error!("Network error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "NETWORK_ERROR",
                    "The CV document could not be reached".to_string(),
                )
            }
            AppError::Store(msg) => {
                tracing::error!("Preference store error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "The theme preference could not be persisted".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

//! Error types for the internal API surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use keyward_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur on the internal API surface.
#[derive(Debug, Error)]
pub enum InternalApiError {
    /// Request input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced resource absent in the caller's tenant scope.
    #[error("{0}")]
    NotFound(String),

    /// Operation valid in shape but forbidden by current state.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for InternalApiError {
    fn from(err: StoreError) -> Self {
        if err.is_validation() {
            InternalApiError::Validation(err.to_string())
        } else if err.is_conflict() {
            InternalApiError::Conflict(err.to_string())
        } else if err.is_not_found() {
            InternalApiError::NotFound(err.to_string())
        } else {
            InternalApiError::Internal(err.to_string())
        }
    }
}

/// Error response format for API errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for InternalApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            InternalApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            InternalApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            InternalApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            InternalApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

//! Error types for the management API surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use keyward_store::StoreError;
use keyward_tenant::TenantError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur on the management API surface.
#[derive(Debug, Error)]
pub enum DevicesApiError {
    /// Request input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller credential absent where required, or unreadable.
    #[error("{0}")]
    Unauthorized(String),

    /// Caller credential names a tenant it may not act for.
    #[error("{0}")]
    Forbidden(String),

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

impl From<StoreError> for DevicesApiError {
    fn from(err: StoreError) -> Self {
        if err.is_validation() {
            DevicesApiError::Validation(err.to_string())
        } else if err.is_conflict() {
            DevicesApiError::Conflict(err.to_string())
        } else if err.is_not_found() {
            DevicesApiError::NotFound(err.to_string())
        } else {
            DevicesApiError::Internal(err.to_string())
        }
    }
}

impl From<TenantError> for DevicesApiError {
    fn from(err: TenantError) -> Self {
        match err {
            TenantError::UnknownTenant(_) => DevicesApiError::Forbidden(err.to_string()),
            TenantError::Missing | TenantError::InvalidFormat(_) => {
                DevicesApiError::Unauthorized(err.to_string())
            }
        }
    }
}

/// Error response format for API errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for DevicesApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            DevicesApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            DevicesApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone())
            }
            DevicesApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            DevicesApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            DevicesApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            DevicesApiError::Internal(msg) => {
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

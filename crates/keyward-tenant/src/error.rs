//! Error types for tenant middleware.
//!
//! Provides structured error responses for tenant-related failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during tenant context extraction and resolution.
///
/// # Example
///
/// ```rust
/// use keyward_tenant::TenantError;
///
/// fn handle_error(err: TenantError) {
///     match err {
///         TenantError::Missing => eprintln!("No tenant context provided"),
///         TenantError::InvalidFormat(msg) => eprintln!("Invalid format: {}", msg),
///         TenantError::UnknownTenant(id) => eprintln!("Unknown tenant: {}", id),
///     }
/// }
/// ```
#[derive(Debug, Clone, Error)]
pub enum TenantError {
    /// No tenant context was found in the request.
    ///
    /// Only raised when the middleware is configured to require one.
    #[error("Tenant context required")]
    Missing,

    /// The tenant id could not be read from the request.
    #[error("Invalid tenant id format: {0}")]
    InvalidFormat(String),

    /// The tenant is not known to the tenant-management service.
    #[error("Unknown tenant: {0}")]
    UnknownTenant(String),
}

impl TenantError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TenantError::Missing | TenantError::InvalidFormat(_) => StatusCode::UNAUTHORIZED,
            TenantError::UnknownTenant(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Get the error code string for the JSON response.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            TenantError::Missing | TenantError::InvalidFormat(_) => "unauthorized",
            TenantError::UnknownTenant(_) => "forbidden",
        }
    }
}

/// Structured JSON error response.
///
/// # Example Response
///
/// ```json
/// {
///     "error": "unauthorized",
///     "message": "Tenant context required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "unauthorized", "forbidden")
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    #[must_use]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<TenantError> for ErrorResponse {
    fn from(err: TenantError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}

impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(self);

        (
            status,
            [("content-type", "application/json")],
            serde_json::to_string(&body).unwrap_or_else(|_| {
                r#"{"error":"internal_error","message":"Failed to serialize error"}"#.to_string()
            }),
        )
            .into_response()
    }
}

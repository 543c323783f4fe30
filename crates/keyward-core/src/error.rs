//! Error Types
//!
//! This module provides standardized error types for Keyward.
//!
//! # Example
//!
//! ```
//! use keyward_core::{KeywardError, Result};
//!
//! fn find_set(id: &str) -> Result<String> {
//!     if id.is_empty() {
//!         return Err(KeywardError::NotFound {
//!             resource: "AuthSet".to_string(),
//!             id: None,
//!         });
//!     }
//!     Ok(format!("AuthSet {}", id))
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Standardized error type for Keyward.
///
/// This enum is the platform-wide error taxonomy; each variant maps to one
/// HTTP class at the API boundary. All errors are terminal per call — the
/// core never retries on the caller's behalf.
///
/// # Variants
///
/// - `Validation` - Input validation failure (HTTP 400)
/// - `Conflict` - Well-formed request forbidden by current state (HTTP 409)
/// - `NotFound` - Resource absent in the caller's tenant scope (HTTP 404)
/// - `TenantIsolation` - Attempt to act outside the caller's scope; surfaced
///   as not-found so foreign data is never confirmed to exist (HTTP 404)
/// - `Unauthorized` - Caller credential absent or unreadable (HTTP 401)
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeywardError {
    /// Input validation failure.
    ///
    /// Use when request input fails validation rules (empty tenant id,
    /// unrecognized destination status). Maps to HTTP 400 Bad Request.
    #[error("Validation error on field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// The operation is valid in shape but the current state forbids it.
    ///
    /// The caller must re-fetch state before retrying.
    /// Maps to HTTP 409 Conflict.
    #[error("Conflict: {message}")]
    Conflict {
        /// Description of the state that forbids the operation
        message: String,
    },

    /// Requested resource was not found in the caller's tenant scope.
    ///
    /// Maps to HTTP 404 Not Found.
    #[error("{resource} not found{}", id.as_ref().map(|i| format!(": {i}")).unwrap_or_default())]
    NotFound {
        /// The type of resource that was not found (e.g., "AuthSet", "Device")
        resource: String,
        /// Optional identifier of the resource
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },

    /// Tenant isolation violation.
    ///
    /// Use when an operation addresses data outside the caller's tenant
    /// partition. This is a critical security error; it must never silently
    /// succeed against another tenant's data, and it surfaces to the caller
    /// exactly like not-found.
    #[error("resource not found in tenant '{tenant_id}'")]
    TenantIsolation {
        /// The tenant scope the caller is confined to
        tenant_id: String,
    },

    /// Caller credential absent or unreadable.
    ///
    /// Maps to HTTP 401 Unauthorized.
    #[error("Unauthorized{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Unauthorized {
        /// Optional message providing more context
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

/// Type alias for Results using `KeywardError`.
///
/// ```
/// use keyward_core::{KeywardError, Result};
///
/// fn example() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, KeywardError>;

//! Request/response models for the internal API surface.

use keyward_store::InitMarker;
use serde::{Deserialize, Serialize};

/// Request body for `POST /tenants`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTenantRequest {
    /// Caller-assigned tenant identifier.
    pub tenant_id: String,
}

impl CreateTenantRequest {
    /// Validates the request, returning an error message on failure.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.tenant_id.trim().is_empty() {
            return Some("tenant_id must not be empty".to_string());
        }
        None
    }
}

/// Response body for `POST /tenants`.
#[derive(Debug, Serialize)]
pub struct CreateTenantResponse {
    /// The tenant the partition belongs to.
    pub tenant_id: String,
    /// Name of the tenant's partition.
    pub partition: String,
    /// The partition's initialization marker.
    pub marker: InitMarker,
}

/// Request body for `POST /devices` (bootstrap submission).
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAuthSetRequest {
    /// Opaque identity payload presented by the device.
    pub identity_data: String,
    /// Public key presented with the identity.
    pub public_key: String,
}

impl SubmitAuthSetRequest {
    /// Validates the request, returning an error message on failure.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.identity_data.trim().is_empty() {
            return Some("identity_data must not be empty".to_string());
        }
        if self.public_key.trim().is_empty() {
            return Some("public_key must not be empty".to_string());
        }
        None
    }
}

/// Request body for `PUT /devices/{id}/status`.
///
/// The status is carried as a raw string so unrecognized values can be
/// rejected as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusRequest {
    /// Requested destination status.
    pub status: String,
}

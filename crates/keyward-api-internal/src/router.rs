//! Router configuration for the internal API surface.

use axum::{
    routing::{post, put},
    Router,
};
use keyward_store::DeviceRegistry;
use keyward_tenant::{TenantConfig, TenantLayer};

use crate::handlers::{change_status_handler, create_tenant_handler, submit_auth_set_handler};
use crate::state::InternalApiState;

/// Create the internal API router.
///
/// Provides:
/// - `POST /tenants` - Provision a tenant partition (idempotent)
/// - `POST /devices` - Record a device bootstrap submission
/// - `PUT /devices/{id}/status` - Accept a preauthorized set
///
/// ## Tenant scoping
///
/// Internal callers pass their tenant scope in the `X-Keyward-Tenant`
/// header; calls without the header operate on the default partition.
pub fn internal_router(registry: DeviceRegistry) -> Router {
    let state = InternalApiState::new(registry);

    Router::new()
        .route("/tenants", post(create_tenant_handler))
        .route("/devices", post(submit_auth_set_handler))
        .route("/devices/:id/status", put(change_status_handler))
        .layer(TenantLayer::with_config(TenantConfig::default()))
        .with_state(state)
}

//! Router configuration for the management API surface.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use keyward_store::DeviceRegistry;
use keyward_tenant::TenantResolver;

use crate::handlers::{
    change_status_handler, decision_handler, get_device_handler, list_devices_handler,
    preauthorize_handler,
};
use crate::state::DevicesApiState;

/// Create the management API router.
///
/// Provides:
/// - `GET /devices` - List devices (status filter + pagination)
/// - `GET /devices/{id}` - Fetch a single device
/// - `POST /devices` - Preauthorize an authentication set
/// - `PUT /devices/{id}/status` - Accept a preauthorized set
/// - `POST /devices/{id}/decision` - Admission verdict on a pending set
///
/// ## Authorization
///
/// Caller identity comes from the bearer token (verified upstream by the
/// gateway); its tenant claim is vetted through the injected
/// [`TenantResolver`] and selects the caller's partition.
pub fn devices_router(registry: DeviceRegistry, resolver: Arc<dyn TenantResolver>) -> Router {
    let state = DevicesApiState::new(registry, resolver);

    Router::new()
        .route(
            "/devices",
            get(list_devices_handler).post(preauthorize_handler),
        )
        .route("/devices/:id", get(get_device_handler))
        .route("/devices/:id/status", put(change_status_handler))
        .route("/devices/:id/decision", post(decision_handler))
        .with_state(state)
}

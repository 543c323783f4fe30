//! Device listing and lookup handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use keyward_core::DeviceId;
use keyward_store::Device;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::error::DevicesApiError;
use crate::models::DeviceListQuery;
use crate::state::DevicesApiState;

/// GET /devices
///
/// Lists the devices visible in the caller's tenant partition, each with
/// its aggregated status and constituent authentication sets. Supports an
/// optional `status` filter plus `page`/`per_page` pagination.
pub async fn list_devices_handler(
    State(state): State<DevicesApiState>,
    ctx: AuthContext,
    Query(query): Query<DeviceListQuery>,
) -> Result<Json<Vec<Device>>, DevicesApiError> {
    let partition = state.authorize(&ctx)?;
    let filter = query.to_filter()?;
    Ok(Json(state.registry.list_devices(&partition, filter)))
}

/// GET /devices/{id}
///
/// Fetches a single device by id.
///
/// # Errors
///
/// - 404 Not Found: no such device in the caller's scope
pub async fn get_device_handler(
    State(state): State<DevicesApiState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Device>, DevicesApiError> {
    let partition = state.authorize(&ctx)?;
    let device = state
        .registry
        .get_device(&partition, DeviceId::from_uuid(id))?;
    Ok(Json(device))
}

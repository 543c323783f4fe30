//! Status-change handler.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use keyward_core::{AuthSetId, AuthStatus, StatusParseError};
use keyward_store::{AuthSet, PartitionKey};
use keyward_tenant::TenantContext;
use uuid::Uuid;

use crate::error::InternalApiError;
use crate::models::ChangeStatusRequest;
use crate::state::InternalApiState;

/// PUT /devices/{id}/status
///
/// Applies the status-change operation to an authentication set in the
/// caller's tenant partition. The only legal transition is
/// `preauthorized -> accepted`.
///
/// # Errors
///
/// - 400 Bad Request: destination is unrecognized or not `accepted`
/// - 404 Not Found: the id does not exist in the caller's scope
/// - 409 Conflict: the set is not currently `preauthorized`
pub async fn change_status_handler(
    State(state): State<InternalApiState>,
    Extension(ctx): Extension<TenantContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChangeStatusRequest>,
) -> Result<Json<AuthSet>, InternalApiError> {
    let target: AuthStatus = request
        .status
        .parse()
        .map_err(|e: StatusParseError| InternalApiError::Validation(e.to_string()))?;

    let partition = PartitionKey::for_scope(ctx.tenant());
    let updated = state
        .registry
        .change_status(&partition, AuthSetId::from_uuid(id), target)?;

    Ok(Json(updated))
}

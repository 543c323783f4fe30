//! Status-change handler.

use axum::{
    extract::{Path, State},
    Json,
};
use keyward_core::{AuthSetId, AuthStatus, StatusParseError};
use keyward_store::AuthSet;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::error::DevicesApiError;
use crate::models::ChangeStatusRequest;
use crate::state::DevicesApiState;

/// PUT /devices/{id}/status
///
/// Applies the status-change operation to an authentication set in the
/// caller's tenant partition. Same semantics as the internal surface: the
/// only legal transition is `preauthorized -> accepted`.
///
/// # Errors
///
/// - 400 Bad Request: destination is unrecognized or not `accepted`
/// - 404 Not Found: the id does not exist in the caller's scope
/// - 409 Conflict: the set is not currently `preauthorized`
pub async fn change_status_handler(
    State(state): State<DevicesApiState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(request): Json<ChangeStatusRequest>,
) -> Result<Json<AuthSet>, DevicesApiError> {
    let target: AuthStatus = request
        .status
        .parse()
        .map_err(|e: StatusParseError| DevicesApiError::Validation(e.to_string()))?;

    let partition = state.authorize(&ctx)?;
    let updated = state
        .registry
        .change_status(&partition, AuthSetId::from_uuid(id), target)?;

    Ok(Json(updated))
}

//! Admission decision handler.

use axum::{
    extract::{Path, State},
    Json,
};
use keyward_core::{AuthSetId, AuthStatus, StatusParseError};
use keyward_store::AuthSet;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::error::DevicesApiError;
use crate::models::DecisionRequest;
use crate::state::DevicesApiState;

/// POST /devices/{id}/decision
///
/// Records an operator's admission verdict on a pending authentication
/// set: `accepted` grants device trust, `rejected` denies it. Sets that
/// are no longer pending cannot be re-decided through this operation.
///
/// # Errors
///
/// - 400 Bad Request: verdict is unrecognized or not `accepted`/`rejected`
/// - 404 Not Found: the id does not exist in the caller's scope
/// - 409 Conflict: the set is not currently `pending`
pub async fn decision_handler(
    State(state): State<DevicesApiState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<AuthSet>, DevicesApiError> {
    let verdict: AuthStatus = request
        .status
        .parse()
        .map_err(|e: StatusParseError| DevicesApiError::Validation(e.to_string()))?;

    let partition = state.authorize(&ctx)?;
    let updated = state
        .registry
        .decide(&partition, AuthSetId::from_uuid(id), verdict)?;

    tracing::info!(partition = %partition, set = %id, verdict = %verdict,
        subject = ?ctx.subject, "admission decision");
    Ok(Json(updated))
}

//! Preauthorization handler.

use axum::{extract::State, http::StatusCode, Json};
use keyward_store::AuthSet;

use crate::auth::AuthContext;
use crate::error::DevicesApiError;
use crate::models::PreauthorizeRequest;
use crate::state::DevicesApiState;

/// POST /devices
///
/// Registers an authentication set directly in `preauthorized` status,
/// bypassing the pending bootstrap entry point.
///
/// # Errors
///
/// - 400 Bad Request: empty identity or key
/// - 409 Conflict: a set for this (identity, key) pair already exists;
///   the stored entry is untouched
pub async fn preauthorize_handler(
    State(state): State<DevicesApiState>,
    ctx: AuthContext,
    Json(request): Json<PreauthorizeRequest>,
) -> Result<(StatusCode, Json<AuthSet>), DevicesApiError> {
    if let Some(error) = request.validate() {
        return Err(DevicesApiError::Validation(error));
    }

    let partition = state.authorize(&ctx)?;
    let set = state
        .registry
        .preauthorize(&partition, &request.identity_data, &request.public_key)?;

    tracing::info!(partition = %partition, set = %set.id, subject = ?ctx.subject,
        "device preauthorized");
    Ok((StatusCode::CREATED, Json(set)))
}

//! Device bootstrap submission handler.

use axum::{extract::State, http::StatusCode, Extension, Json};
use keyward_store::{AuthSet, PartitionKey};
use keyward_tenant::TenantContext;

use crate::error::InternalApiError;
use crate::models::SubmitAuthSetRequest;
use crate::state::InternalApiState;

/// POST /devices
///
/// Records a device bootstrap submission as a `pending` authentication set
/// in the caller's tenant partition.
///
/// Re-submitting the same (identity, key) pair returns 200 with the
/// existing set instead of duplicating it.
///
/// # Errors
///
/// - 400 Bad Request: empty identity or key
pub async fn submit_auth_set_handler(
    State(state): State<InternalApiState>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<SubmitAuthSetRequest>,
) -> Result<(StatusCode, Json<AuthSet>), InternalApiError> {
    if let Some(error) = request.validate() {
        return Err(InternalApiError::Validation(error));
    }

    let partition = PartitionKey::for_scope(ctx.tenant());
    let outcome = state
        .registry
        .submit(&partition, &request.identity_data, &request.public_key);

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.set)))
}

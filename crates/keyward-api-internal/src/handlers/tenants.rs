//! Tenant provisioning handler.

use axum::{extract::State, http::StatusCode, Json};
use keyward_core::TenantId;
use keyward_store::PartitionKey;

use crate::error::InternalApiError;
use crate::models::{CreateTenantRequest, CreateTenantResponse};
use crate::state::InternalApiState;

/// POST /tenants
///
/// Allocates (or confirms) the tenant's isolated partition and seeds its
/// initialization marker.
///
/// Idempotent: provisioning an existing tenant returns 201 again without
/// touching the partition.
///
/// # Errors
///
/// - 400 Bad Request: empty tenant id
pub async fn create_tenant_handler(
    State(state): State<InternalApiState>,
    Json(request): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<CreateTenantResponse>), InternalApiError> {
    if let Some(error) = request.validate() {
        return Err(InternalApiError::Validation(error));
    }

    let tenant = TenantId::parse(&request.tenant_id)
        .map_err(|e| InternalApiError::Validation(e.to_string()))?;
    let partition = PartitionKey::for_tenant(&tenant);

    let outcome = state.registry.provision(&partition);
    if outcome.created {
        tracing::info!(tenant_id = %tenant, partition = %partition, "tenant provisioned");
    } else {
        tracing::debug!(tenant_id = %tenant, "tenant already provisioned");
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateTenantResponse {
            tenant_id: tenant.to_string(),
            partition: partition.name().to_string(),
            marker: outcome.marker,
        }),
    ))
}

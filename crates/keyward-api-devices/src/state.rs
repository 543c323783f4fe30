//! Application state for the management API surface.

use std::sync::Arc;

use keyward_store::{DeviceRegistry, PartitionKey};
use keyward_tenant::TenantResolver;

use crate::auth::AuthContext;
use crate::error::DevicesApiError;

/// Shared state handed to every management API handler.
#[derive(Clone)]
pub struct DevicesApiState {
    /// The partition-per-tenant authentication-set registry.
    pub registry: DeviceRegistry,
    /// Seam to the tenant-management service for vetting tenant claims.
    pub resolver: Arc<dyn TenantResolver>,
}

impl DevicesApiState {
    /// Creates the state around a registry handle and tenant resolver.
    #[must_use]
    pub fn new(registry: DeviceRegistry, resolver: Arc<dyn TenantResolver>) -> Self {
        Self { registry, resolver }
    }

    /// Vets the caller's tenant claim and returns the partition its
    /// operations are confined to.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesApiError::Forbidden`] when the resolver does not
    /// know the claimed tenant.
    pub fn authorize(&self, ctx: &AuthContext) -> Result<PartitionKey, DevicesApiError> {
        if let Some(tenant) = &ctx.tenant {
            self.resolver.resolve(tenant)?;
        }
        Ok(ctx.partition_key())
    }
}

//! Tenant resolution seam.
//!
//! Tenant lifecycle is owned by an external tenant-management service; this
//! backend only needs to ask whether a tenant id from a caller credential
//! is legitimate. [`TenantResolver`] is that seam as an injectable trait,
//! so production code can back it with the real service while tests inject
//! a static mapping — never a global, monkey-patchable object.

use crate::error::TenantError;
use keyward_core::TenantId;
use std::collections::HashSet;

/// Resolves whether a tenant id names a legitimate tenant.
pub trait TenantResolver: Send + Sync {
    /// Validates the tenant, returning an error for unknown tenants.
    ///
    /// # Errors
    ///
    /// Returns [`TenantError::UnknownTenant`] when the tenant is not known.
    fn resolve(&self, tenant: &TenantId) -> Result<(), TenantError>;
}

/// Resolver that accepts every tenant.
///
/// Used when a fronting gateway (or the tenant-management service itself)
/// has already vetted the credential before it reaches this backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTenantResolver;

impl TenantResolver for OpenTenantResolver {
    fn resolve(&self, _tenant: &TenantId) -> Result<(), TenantError> {
        Ok(())
    }
}

/// Resolver backed by a static set of known tenants.
///
/// The test double: stands in for the tenant-management service with a
/// fixed mapping.
///
/// # Example
///
/// ```
/// use keyward_core::TenantId;
/// use keyward_tenant::{StaticTenantResolver, TenantResolver};
///
/// let resolver = StaticTenantResolver::new(["tenant1", "tenant2"]);
/// let known: TenantId = "tenant1".parse().unwrap();
/// let unknown: TenantId = "ghost".parse().unwrap();
///
/// assert!(resolver.resolve(&known).is_ok());
/// assert!(resolver.resolve(&unknown).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTenantResolver {
    known: HashSet<String>,
}

impl StaticTenantResolver {
    /// Creates a resolver knowing exactly the given tenant ids.
    pub fn new<I, S>(tenants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: tenants.into_iter().map(Into::into).collect(),
        }
    }
}

impl TenantResolver for StaticTenantResolver {
    fn resolve(&self, tenant: &TenantId) -> Result<(), TenantError> {
        if self.known.contains(tenant.as_str()) {
            Ok(())
        } else {
            Err(TenantError::UnknownTenant(tenant.to_string()))
        }
    }
}

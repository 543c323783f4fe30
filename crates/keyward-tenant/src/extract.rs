//! Tenant scope extraction from HTTP requests.

use crate::config::TenantConfig;
use crate::error::TenantError;
use http::Request;
use keyward_core::TenantId;

/// The tenant scope of a request, inserted into Axum request extensions.
///
/// A request may carry no tenant scope at all; such requests operate on the
/// default (single-tenant) partition. Handlers access the context via
/// `Extension<TenantContext>`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::Extension;
/// use keyward_tenant::TenantContext;
///
/// async fn handler(
///     Extension(ctx): Extension<TenantContext>,
/// ) -> String {
///     match ctx.tenant() {
///         Some(tenant) => format!("Tenant: {tenant}"),
///         None => "Default partition".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TenantContext {
    scope: Option<TenantId>,
}

impl TenantContext {
    /// Create a context scoped to a tenant.
    #[must_use]
    pub fn scoped(tenant: TenantId) -> Self {
        Self {
            scope: Some(tenant),
        }
    }

    /// Create a context for the default partition.
    #[must_use]
    pub fn unscoped() -> Self {
        Self { scope: None }
    }

    /// The tenant this request is scoped to, if any.
    #[must_use]
    pub fn tenant(&self) -> Option<&TenantId> {
        self.scope.as_ref()
    }
}

impl From<TenantId> for TenantContext {
    fn from(tenant: TenantId) -> Self {
        Self::scoped(tenant)
    }
}

/// Extract the tenant scope from an HTTP request.
///
/// This function tries, in order:
/// 1. Request extensions (if upstream middleware already set a `TenantId`)
/// 2. The configured tenant header
///
/// Returns `Ok(None)` when the request carries no tenant scope — whether
/// that is acceptable is the caller's (the middleware's) decision.
///
/// # Errors
///
/// Returns `TenantError::InvalidFormat` if the header value is not valid
/// UTF-8.
pub fn extract_tenant_scope<B>(
    req: &Request<B>,
    config: &TenantConfig,
) -> Result<Option<TenantId>, TenantError> {
    // 1. Check if a TenantId was already set by upstream auth middleware
    if let Some(tenant) = req.extensions().get::<TenantId>() {
        return Ok(Some(tenant.clone()));
    }

    // 2. Fall back to header extraction
    extract_from_header(req, &config.header_name)
}

/// Extract the tenant scope from an HTTP header.
///
/// A missing or blank header means "no scope" rather than an error; the
/// tenant id namespace is caller-assigned strings, so any non-blank value
/// is accepted.
///
/// # Errors
///
/// Returns `TenantError::InvalidFormat` if the header value is not valid
/// UTF-8.
pub fn extract_from_header<B>(
    req: &Request<B>,
    header_name: &str,
) -> Result<Option<TenantId>, TenantError> {
    let Some(header_value) = req.headers().get(header_name) else {
        return Ok(None);
    };

    let value_str = header_value
        .to_str()
        .map_err(|_| TenantError::InvalidFormat("Header value is not valid UTF-8".to_string()))?;

    match TenantId::parse(value_str) {
        Ok(tenant) => Ok(Some(tenant)),
        // A blank header is treated the same as an absent one.
        Err(_) => Ok(None),
    }
}

//! Caller identity extraction for the management surface.
//!
//! Management calls are authenticated by a fronting gateway; this backend
//! reads the bearer token's claims without verifying the signature — the
//! gateway already did — to learn who is calling and which tenant they act
//! for. A `X-Keyward-Tenant` header is honored when the token carries no
//! tenant claim, and a request with neither runs against the default
//! partition.

use axum::{async_trait, extract::FromRequestParts};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use http::request::Parts;
use keyward_core::TenantId;
use keyward_store::PartitionKey;
use serde::Deserialize;

use crate::error::DevicesApiError;

/// Header consulted when the bearer token has no tenant claim.
const TENANT_HEADER: &str = "X-Keyward-Tenant";

/// Claims this backend reads from the bearer token payload.
#[derive(Debug, Deserialize)]
struct BearerClaims {
    /// Subject: the operator/user identity.
    sub: Option<String>,
    /// Tenant the credential is scoped to.
    #[serde(rename = "keyward.tenant")]
    tenant: Option<String>,
}

/// The authenticated caller of a management request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Operator identity from the token's `sub` claim, when present.
    pub subject: Option<String>,
    /// Tenant scope from the token (or the tenant header fallback).
    pub tenant: Option<TenantId>,
}

impl AuthContext {
    /// The partition this caller's operations are confined to.
    #[must_use]
    pub fn partition_key(&self) -> PartitionKey {
        PartitionKey::for_scope(self.tenant.as_ref())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = DevicesApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = match parts.headers.get(http::header::AUTHORIZATION) {
            Some(value) => Some(parse_bearer(value)?),
            None => None,
        };

        let subject = claims.as_ref().and_then(|c| c.sub.clone());

        let tenant = match claims.as_ref().and_then(|c| c.tenant.as_deref()) {
            Some(raw) => Some(TenantId::parse(raw).map_err(|e| {
                DevicesApiError::Unauthorized(format!("invalid tenant claim: {e}"))
            })?),
            None => tenant_from_header(parts)?,
        };

        if let Some(tenant) = &tenant {
            tracing::debug!(tenant_id = %tenant, subject = ?subject, "management caller scoped");
        }

        Ok(AuthContext { subject, tenant })
    }
}

/// Parses the `Authorization` header as an unverified bearer JWT.
fn parse_bearer(value: &http::HeaderValue) -> Result<BearerClaims, DevicesApiError> {
    let raw = value
        .to_str()
        .map_err(|_| DevicesApiError::Unauthorized("authorization header is not UTF-8".into()))?;

    let token = raw
        .strip_prefix("Bearer ")
        .ok_or_else(|| DevicesApiError::Unauthorized("expected a bearer token".into()))?;

    let mut segments = token.split('.');
    let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
        return Err(DevicesApiError::Unauthorized("malformed bearer token".into()));
    };

    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DevicesApiError::Unauthorized("malformed bearer token payload".into()))?;

    serde_json::from_slice(&decoded)
        .map_err(|_| DevicesApiError::Unauthorized("unreadable bearer token claims".into()))
}

/// Reads the tenant header fallback; blank values mean "no scope".
fn tenant_from_header(parts: &Parts) -> Result<Option<TenantId>, DevicesApiError> {
    let Some(value) = parts.headers.get(TENANT_HEADER) else {
        return Ok(None);
    };
    let raw = value
        .to_str()
        .map_err(|_| DevicesApiError::Unauthorized("tenant header is not UTF-8".into()))?;
    Ok(TenantId::parse(raw).ok())
}

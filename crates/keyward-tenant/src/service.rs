//! Tower Service implementation for tenant middleware.
//!
//! Provides `TenantService` that wraps inner services with tenant extraction.

use crate::config::TenantConfig;
use crate::error::TenantError;
use crate::extract::{extract_tenant_scope, TenantContext};
use axum::response::IntoResponse;
use http::{Method, Request, Response};
use pin_project_lite::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower_service::Service;

/// Tower Service that extracts tenant context.
///
/// This service wraps an inner service and:
/// 1. Extracts the tenant scope from request extensions or the tenant header
/// 2. Inserts a [`TenantContext`] (and the `TenantId`, when present) into
///    request extensions
/// 3. Rejects unscoped requests when the configuration requires a tenant
///
/// # Type Parameters
///
/// * `S` - The inner service type
#[derive(Debug, Clone)]
pub struct TenantService<S> {
    inner: S,
    config: Arc<TenantConfig>,
}

impl<S> TenantService<S> {
    /// Create a new `TenantService`.
    pub fn new(inner: S, config: Arc<TenantConfig>) -> Self {
        Self { inner, config }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for TenantService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = TenantServiceFuture<S, ReqBody, ResBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        // Skip tenant extraction for OPTIONS requests (CORS preflight)
        if req.method() == Method::OPTIONS {
            let inner = self.inner.clone();
            let mut inner = std::mem::replace(&mut self.inner, inner);
            return TenantServiceFuture::Inner {
                future: inner.call(req),
            };
        }

        match extract_tenant_scope(&req, &self.config) {
            Ok(Some(tenant)) => {
                req.extensions_mut().insert(tenant.clone());
                req.extensions_mut()
                    .insert(TenantContext::scoped(tenant.clone()));

                tracing::debug!(tenant_id = %tenant, "Tenant context extracted");

                let inner = self.inner.clone();
                let mut inner = std::mem::replace(&mut self.inner, inner);
                TenantServiceFuture::Inner {
                    future: inner.call(req),
                }
            }
            Ok(None) => {
                if self.config.require_tenant {
                    tracing::warn!("Tenant context required but absent");
                    TenantServiceFuture::Error {
                        error: Some(TenantError::Missing),
                    }
                } else {
                    // Unscoped request: default partition
                    req.extensions_mut().insert(TenantContext::unscoped());

                    tracing::debug!("No tenant scope, using default partition");

                    let inner = self.inner.clone();
                    let mut inner = std::mem::replace(&mut self.inner, inner);
                    TenantServiceFuture::Inner {
                        future: inner.call(req),
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Tenant context extraction failed");
                TenantServiceFuture::Error { error: Some(err) }
            }
        }
    }
}

pin_project! {
    /// Future for `TenantService`.
    #[project = TenantServiceFutureProj]
    pub enum TenantServiceFuture<S, ReqBody, ResBody>
    where
        S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    {
        /// Inner service future (tenant extraction succeeded or not required)
        Inner {
            #[pin]
            future: S::Future,
        },
        /// Error response (extraction failed or tenant required but absent)
        Error {
            error: Option<TenantError>,
        },
    }
}

impl<S, ReqBody, ResBody> Future for TenantServiceFuture<S, ReqBody, ResBody>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Output = Result<Response<ResBody>, S::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            TenantServiceFutureProj::Inner { future } => future.poll(cx),
            TenantServiceFutureProj::Error { error } => {
                let err = error.take().unwrap_or(TenantError::Missing);
                let response = err.into_response();
                // Convert axum Response<Body> to Response<ResBody>; error
                // responses carry their meaning in the status code.
                let (parts, _body) = response.into_parts();
                let response = Response::from_parts(parts, ResBody::default());
                Poll::Ready(Ok(response))
            }
        }
    }
}

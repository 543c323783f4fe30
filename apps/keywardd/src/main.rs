//! Keyward device admission service daemon.
//!
//! Composes the two API surfaces over one shared registry:
//! - `/api/internal/v1` — trusted service-to-service surface
//! - `/api/management/v1` — operator-facing management surface

mod config;
mod error;

use std::sync::Arc;

use axum::{routing::get, Router};
use keyward_store::DeviceRegistry;
use keyward_tenant::OpenTenantResolver;
use tracing_subscriber::EnvFilter;

use crate::config::DaemonConfig;
use crate::error::DaemonResult;

#[tokio::main]
async fn main() -> DaemonResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DaemonConfig::from_env()?;
    let app = build_app();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "keywardd listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the full application router.
///
/// Tenant claims are not re-vetted here: the fronting gateway and the
/// tenant-management service own credential verification, so the open
/// resolver is wired in. Deployments that terminate management traffic
/// directly should swap in a resolver backed by the tenant service.
fn build_app() -> Router {
    let registry = DeviceRegistry::new();

    let internal = keyward_api_internal::internal_router(registry.clone());
    let management =
        keyward_api_devices::devices_router(registry.clone(), Arc::new(OpenTenantResolver));

    Router::new()
        .route("/health", get(health))
        .nest("/api/internal/v1", internal)
        .nest("/api/management/v1", management)
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app() {
        // The router must assemble without panicking.
        let _app = build_app();
    }
}

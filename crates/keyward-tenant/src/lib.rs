//! # keyward-tenant
//!
//! Tower/Axum middleware for multi-tenant context extraction.
//!
//! This library provides middleware that extracts the tenant scope from
//! incoming HTTP requests and makes it available to route handlers via
//! Axum request extensions. A request without tenant scope runs against
//! the default (single-tenant) partition unless the middleware is
//! configured to require one.
//!
//! ## Features
//!
//! - **Header Extraction**: Extract tenant id from the `X-Keyward-Tenant`
//!   header (or a configured header name)
//! - **Optional Enforcement**: Reject unscoped requests with a structured
//!   401 when a tenant is required
//! - **Resolver Seam**: [`TenantResolver`] abstracts the external
//!   tenant-management service; [`StaticTenantResolver`] is the test double
//! - **Composability**: Standard Tower Layer/Service for middleware
//!   composition
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keyward_tenant::{TenantContext, TenantLayer};
//! use axum::{Router, Extension, routing::get};
//!
//! async fn list_devices(
//!     Extension(ctx): Extension<TenantContext>,
//! ) -> String {
//!     format!("Devices in partition: {}", ctx.partition_key())
//! }
//!
//! let app = Router::new()
//!     .route("/devices", get(list_devices))
//!     .layer(TenantLayer::new());
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use keyward_tenant::{TenantConfig, TenantLayer};
//!
//! let config = TenantConfig::builder()
//!     .header_name("X-Org-ID")
//!     .require_tenant(true)
//!     .build();
//!
//! let layer = TenantLayer::with_config(config);
//! ```

mod config;
mod error;
mod extract;
mod layer;
mod resolver;
mod service;

pub use config::{TenantConfig, TenantConfigBuilder};
pub use error::{ErrorResponse, TenantError};
pub use extract::{extract_tenant_scope, TenantContext};
pub use layer::TenantLayer;
pub use resolver::{OpenTenantResolver, StaticTenantResolver, TenantResolver};
pub use service::TenantService;

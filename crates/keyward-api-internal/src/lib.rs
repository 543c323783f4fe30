//! # keyward-api-internal
//!
//! The internal (service-to-service) HTTP surface of the Keyward backend.
//!
//! Trusted internal callers use this surface to provision tenant
//! partitions, forward device bootstrap submissions, and accept
//! preauthorized authentication sets. Calls carry their tenant scope in
//! the `X-Keyward-Tenant` header; unscoped calls operate on the default
//! partition.
//!
//! Routes:
//! - `POST /tenants` — provision a tenant partition (idempotent)
//! - `POST /devices` — record a device bootstrap submission
//! - `PUT /devices/{id}/status` — accept a preauthorized set

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use error::{ErrorResponse, InternalApiError};
pub use router::internal_router;
pub use state::InternalApiState;

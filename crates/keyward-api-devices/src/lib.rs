//! # keyward-api-devices
//!
//! The management HTTP surface of the Keyward backend.
//!
//! Operators and their tooling use this surface to inspect devices,
//! preauthorize authentication sets, review pending submissions, and
//! accept preauthorized sets. Caller identity comes from the bearer
//! token; its tenant claim selects the caller's partition. Requests
//! without tenant scope operate on the default partition.
//!
//! Routes:
//! - `GET /devices` — list devices (optional status filter + pagination)
//! - `GET /devices/{id}` — fetch a single device
//! - `POST /devices` — preauthorize an authentication set
//! - `PUT /devices/{id}/status` — accept a preauthorized set
//! - `POST /devices/{id}/decision` — admission verdict on a pending set

pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use auth::AuthContext;
pub use error::{DevicesApiError, ErrorResponse};
pub use router::devices_router;
pub use state::DevicesApiState;

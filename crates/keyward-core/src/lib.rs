//! Keyward Core Library
//!
//! Shared types for the Keyward device admission platform.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`TenantId`, `DeviceId`, `AuthSetId`)
//! - [`status`] - The authentication-set lifecycle (`AuthStatus`) and its
//!   transition rules
//! - [`error`] - Standardized error types (`KeywardError`)
//!
//! # Example
//!
//! ```
//! use keyward_core::{AuthSetId, AuthStatus, KeywardError, Result, TenantId};
//!
//! let tenant: TenantId = "acme".parse().unwrap();
//! let set_id = AuthSetId::new();
//!
//! fn example() -> Result<()> {
//!     Err(KeywardError::NotFound {
//!         resource: "AuthSet".to_string(),
//!         id: None,
//!     })
//! }
//! ```

pub mod error;
pub mod ids;
pub mod status;

// Re-export main types for convenient access
pub use error::{KeywardError, Result};
pub use ids::{AuthSetId, DeviceId, TenantId};
pub use status::{AuthStatus, StatusParseError, TransitionError};

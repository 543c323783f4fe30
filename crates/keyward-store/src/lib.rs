//! # keyward-store
//!
//! Partition-per-tenant authentication-set registry.
//!
//! Every tenant gets its own logical partition, named deterministically
//! from the tenant id. A partition holds the tenant's authentication sets
//! plus an initialization marker proving the partition was provisioned.
//! Operations on different tenants never share mutable state: the registry
//! is one map of independently locked partitions, indexed first by tenant,
//! then by set id.
//!
//! # Example
//!
//! ```
//! use keyward_core::{AuthStatus, TenantId};
//! use keyward_store::{DeviceRegistry, PartitionKey};
//!
//! let registry = DeviceRegistry::new();
//! let tenant: TenantId = "acme".parse().unwrap();
//! let partition = PartitionKey::for_tenant(&tenant);
//!
//! // Operator preauthorizes a device ahead of its first request.
//! let set = registry
//!     .preauthorize(&partition, r#"{"mac":"aa:bb"}"#, "preauth-key")
//!     .unwrap();
//! assert_eq!(set.status, AuthStatus::Preauthorized);
//!
//! // Accepting flips it; devices in other partitions are unaffected.
//! let set = registry
//!     .change_status(&partition, set.id, AuthStatus::Accepted)
//!     .unwrap();
//! assert_eq!(set.status, AuthStatus::Accepted);
//! ```

pub mod auth_set;
pub mod device;
pub mod error;
pub mod partition;
pub mod registry;

pub use auth_set::AuthSet;
pub use device::{Device, DeviceFilter};
pub use error::StoreError;
pub use partition::{InitMarker, PartitionKey, SCHEMA_VERSION};
pub use registry::{DeviceRegistry, ProvisionOutcome, SubmitOutcome};

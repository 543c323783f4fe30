//! Tenant partition naming and initialization.
//!
//! Each tenant's data lives in its own partition, named deterministically
//! from the tenant id so any component can locate it without a lookup
//! table. The unscoped (single-tenant) deployment uses the base partition
//! name.

use chrono::{DateTime, Utc};
use keyward_core::TenantId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base name of the default partition, used when a call carries no tenant
/// scope. Tenant partitions are `{base}-{tenant_id}`.
const PARTITION_BASE: &str = "keyward";

/// Current schema version written into every initialization marker.
pub const SCHEMA_VERSION: u32 = 1;

/// Deterministic name of a tenant's isolated partition.
///
/// `PartitionKey` is passed explicitly through every registry call rather
/// than being ambient state, so isolation stays provable in tests.
///
/// # Example
///
/// ```
/// use keyward_core::TenantId;
/// use keyward_store::PartitionKey;
///
/// let tenant: TenantId = "foobar".parse().unwrap();
/// assert_eq!(PartitionKey::for_tenant(&tenant).name(), "keyward-foobar");
/// assert_eq!(PartitionKey::default_partition().name(), "keyward");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionKey(String);

impl PartitionKey {
    /// The partition for a tenant, named `keyward-{tenant_id}`.
    #[must_use]
    pub fn for_tenant(tenant: &TenantId) -> Self {
        Self(format!("{PARTITION_BASE}-{tenant}"))
    }

    /// The default partition for calls without tenant scope.
    #[must_use]
    pub fn default_partition() -> Self {
        Self(PARTITION_BASE.to_string())
    }

    /// The partition for an optional tenant scope.
    #[must_use]
    pub fn for_scope(tenant: Option<&TenantId>) -> Self {
        match tenant {
            Some(t) => Self::for_tenant(t),
            None => Self::default_partition(),
        }
    }

    /// Returns the partition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Initialization marker seeded into a partition when it is provisioned.
///
/// Downstream consumers check this record to detect that the partition's
/// bookkeeping collections exist; repeated provisioning leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitMarker {
    /// Schema version the partition was seeded with.
    pub schema_version: u32,
    /// When the partition was first provisioned.
    pub provisioned_at: DateTime<Utc>,
}

impl InitMarker {
    /// Creates a marker for a freshly provisioned partition.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            provisioned_at: Utc::now(),
        }
    }
}

impl Default for InitMarker {
    fn default() -> Self {
        Self::new()
    }
}

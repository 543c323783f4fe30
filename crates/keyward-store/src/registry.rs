//! The authentication-set registry.
//!
//! [`DeviceRegistry`] is the one logical store of the backend, indexed
//! first by partition, then by set id. The outer map only resolves
//! partition handles; every partition carries its own lock, so operations
//! on different tenants never contend. Within a partition, status changes
//! run under the partition's write lock, which gives the per-set mutual
//! exclusion the admission rules require: of two concurrent accepts,
//! exactly one observes `preauthorized` and wins.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::auth_set::AuthSet;
use crate::device::{Device, DeviceFilter};
use crate::error::StoreError;
use crate::partition::{InitMarker, PartitionKey};
use keyward_core::{AuthSetId, AuthStatus, DeviceId};

/// Per-partition state: the initialization marker, the set collection, a
/// credential index for upsert/duplicate checks, and the submission order.
#[derive(Debug, Default)]
struct PartitionState {
    marker: InitMarker,
    sets: HashMap<AuthSetId, AuthSet>,
    by_credential: HashMap<(String, String), AuthSetId>,
    order: Vec<AuthSetId>,
}

impl PartitionState {
    fn insert(&mut self, set: AuthSet) -> AuthSet {
        self.by_credential.insert(
            (set.identity_data.clone(), set.public_key.clone()),
            set.id,
        );
        self.order.push(set.id);
        self.sets.insert(set.id, set.clone());
        set
    }

    fn find_by_credential(&self, identity_data: &str, public_key: &str) -> Option<&AuthSet> {
        self.by_credential
            .get(&(identity_data.to_string(), public_key.to_string()))
            .and_then(|id| self.sets.get(id))
    }

    /// Snapshot of all sets in submission order.
    fn snapshot(&self) -> Vec<AuthSet> {
        self.order
            .iter()
            .filter_map(|id| self.sets.get(id))
            .cloned()
            .collect()
    }
}

/// Outcome of provisioning a tenant partition.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionOutcome {
    /// True if the partition was created by this call, false if it already
    /// existed (both are success).
    pub created: bool,
    /// The partition's initialization marker.
    pub marker: InitMarker,
}

/// Outcome of a device bootstrap submission.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The pending set — freshly created or the pre-existing one.
    pub set: AuthSet,
    /// True if this submission created the set.
    pub created: bool,
}

/// Partition-per-tenant registry of authentication sets.
///
/// Cheaply cloneable; all clones share the same underlying partitions.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    partitions: Arc<RwLock<HashMap<PartitionKey, Arc<RwLock<PartitionState>>>>>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn partition(&self, key: &PartitionKey) -> Option<Arc<RwLock<PartitionState>>> {
        self.partitions.read().get(key).cloned()
    }

    /// Resolves the partition handle, creating and seeding it on first use.
    ///
    /// Writes into an unprovisioned partition allocate it implicitly; the
    /// marker is seeded either way, so a partition never exists without it.
    fn partition_or_create(&self, key: &PartitionKey) -> (Arc<RwLock<PartitionState>>, bool) {
        if let Some(existing) = self.partition(key) {
            return (existing, false);
        }
        let mut partitions = self.partitions.write();
        // Re-check under the write lock; another caller may have won.
        if let Some(existing) = partitions.get(key) {
            return (Arc::clone(existing), false);
        }
        let state = Arc::new(RwLock::new(PartitionState::default()));
        partitions.insert(key.clone(), Arc::clone(&state));
        tracing::info!(partition = %key, "provisioned tenant partition");
        (state, true)
    }

    /// Allocates (or confirms) the partition and seeds its initialization
    /// marker. Idempotent: repeated calls succeed without touching the
    /// existing partition.
    pub fn provision(&self, key: &PartitionKey) -> ProvisionOutcome {
        let (partition, created) = self.partition_or_create(key);
        let marker = partition.read().marker;
        ProvisionOutcome { created, marker }
    }

    /// Returns true if the partition exists.
    #[must_use]
    pub fn is_provisioned(&self, key: &PartitionKey) -> bool {
        self.partitions.read().contains_key(key)
    }

    /// Returns the partition's initialization marker, if provisioned.
    #[must_use]
    pub fn marker(&self, key: &PartitionKey) -> Option<InitMarker> {
        self.partition(key).map(|p| p.read().marker)
    }

    /// Records a device bootstrap submission as a `pending` set.
    ///
    /// Re-submitting the same (identity, key) pair returns the existing set
    /// unchanged instead of duplicating it.
    pub fn submit(
        &self,
        key: &PartitionKey,
        identity_data: &str,
        public_key: &str,
    ) -> SubmitOutcome {
        let (partition, _) = self.partition_or_create(key);
        let mut state = partition.write();

        if let Some(existing) = state.find_by_credential(identity_data, public_key) {
            tracing::debug!(partition = %key, set = %existing.id, "bootstrap re-submission");
            return SubmitOutcome {
                set: existing.clone(),
                created: false,
            };
        }

        let set = state.insert(AuthSet::new(identity_data, public_key, AuthStatus::Pending));
        tracing::debug!(partition = %key, set = %set.id, device = %set.device_id,
            "authentication set submitted");
        SubmitOutcome { set, created: true }
    }

    /// Registers a set directly in `preauthorized` status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateAuthSet`] if a set for the same
    /// (identity, key) pair already exists; the stored entry is untouched.
    pub fn preauthorize(
        &self,
        key: &PartitionKey,
        identity_data: &str,
        public_key: &str,
    ) -> Result<AuthSet, StoreError> {
        let (partition, _) = self.partition_or_create(key);
        let mut state = partition.write();

        if let Some(existing) = state.find_by_credential(identity_data, public_key) {
            return Err(StoreError::DuplicateAuthSet {
                existing: existing.id,
            });
        }

        let set = state.insert(AuthSet::new(
            identity_data,
            public_key,
            AuthStatus::Preauthorized,
        ));
        tracing::debug!(partition = %key, set = %set.id, device = %set.device_id,
            "authentication set preauthorized");
        Ok(set)
    }

    /// Applies the status-change operation (`preauthorized -> accepted`).
    ///
    /// Runs under the partition's write lock: the current status is
    /// re-checked inside the critical section, so of two racing calls only
    /// one succeeds and the other gets the conflict.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AuthSetNotFound`] — id absent in the caller's
    ///   partition (including ids that live in another tenant's partition).
    /// - [`StoreError::Transition`] — target or source rejected by the
    ///   transition rules.
    pub fn change_status(
        &self,
        key: &PartitionKey,
        id: AuthSetId,
        target: AuthStatus,
    ) -> Result<AuthSet, StoreError> {
        let partition = self
            .partition(key)
            .ok_or(StoreError::AuthSetNotFound(id))?;
        let mut state = partition.write();

        let set = state
            .sets
            .get_mut(&id)
            .ok_or(StoreError::AuthSetNotFound(id))?;

        AuthStatus::validate_change(set.status, target)?;
        set.set_status(target);
        tracing::info!(partition = %key, set = %id, status = %target,
            "authentication set status changed");
        Ok(set.clone())
    }

    /// Applies an admission decision to a `pending` set.
    ///
    /// # Errors
    ///
    /// Same classes as [`change_status`](Self::change_status), with the
    /// decision rules: the verdict must be `accepted` or `rejected` and the
    /// set must currently be `pending`.
    pub fn decide(
        &self,
        key: &PartitionKey,
        id: AuthSetId,
        verdict: AuthStatus,
    ) -> Result<AuthSet, StoreError> {
        let partition = self
            .partition(key)
            .ok_or(StoreError::AuthSetNotFound(id))?;
        let mut state = partition.write();

        let set = state
            .sets
            .get_mut(&id)
            .ok_or(StoreError::AuthSetNotFound(id))?;

        AuthStatus::validate_decision(set.status, verdict)?;
        set.set_status(verdict);
        tracing::info!(partition = %key, set = %id, status = %verdict,
            "admission decision recorded");
        Ok(set.clone())
    }

    /// Fetches a single authentication set.
    pub fn get_auth_set(&self, key: &PartitionKey, id: AuthSetId) -> Result<AuthSet, StoreError> {
        let partition = self
            .partition(key)
            .ok_or(StoreError::AuthSetNotFound(id))?;
        let state = partition.read();
        state
            .sets
            .get(&id)
            .cloned()
            .ok_or(StoreError::AuthSetNotFound(id))
    }

    /// Lists the devices visible in the caller's partition.
    ///
    /// The projection runs over a snapshot taken under the partition's read
    /// lock, so the result is consistent per call. An unprovisioned
    /// partition simply has no devices.
    #[must_use]
    pub fn list_devices(&self, key: &PartitionKey, filter: DeviceFilter) -> Vec<Device> {
        let Some(partition) = self.partition(key) else {
            return Vec::new();
        };
        let snapshot = partition.read().snapshot();
        filter.apply(Device::project(snapshot))
    }

    /// Fetches a single device by id.
    pub fn get_device(&self, key: &PartitionKey, id: DeviceId) -> Result<Device, StoreError> {
        let partition = self.partition(key).ok_or(StoreError::DeviceNotFound(id))?;
        let snapshot = partition.read().snapshot();
        Device::project(snapshot)
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(StoreError::DeviceNotFound(id))
    }
}

//! Authentication-set records.

use chrono::{DateTime, Utc};
use keyward_core::{AuthSetId, AuthStatus, DeviceId};
use serde::{Deserialize, Serialize};

/// A (device identity, public key) pair submitted for trust evaluation.
///
/// Each set has its own lifecycle status independent of other sets for the
/// same device; a device that re-bootstraps with a new key gets a second
/// set under the same [`DeviceId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSet {
    /// Unique identifier of the set within its tenant partition.
    pub id: AuthSetId,

    /// Device this set belongs to, derived from the identity payload.
    pub device_id: DeviceId,

    /// Opaque identity payload, e.g. a serialized key-value identity
    /// document such as `{"mac":"00:11:22:33:44:55"}`.
    pub identity_data: String,

    /// Public key the device presented with this identity.
    pub public_key: String,

    /// Current lifecycle status.
    pub status: AuthStatus,

    /// Timestamp when the set was created.
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last status change.
    pub updated_at: DateTime<Utc>,
}

impl AuthSet {
    /// Creates a new set in the given initial status.
    #[must_use]
    pub fn new(identity_data: &str, public_key: &str, status: AuthStatus) -> Self {
        let now = Utc::now();
        Self {
            id: AuthSetId::new(),
            device_id: DeviceId::from_identity(identity_data),
            identity_data: identity_data.to_string(),
            public_key: public_key.to_string(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a status change, bumping `updated_at`.
    ///
    /// Callers must have validated the transition first; this only mutates.
    pub(crate) fn set_status(&mut self, status: AuthStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

//! Device view projection.
//!
//! Devices are not stored; they are derived from the partition's
//! authentication sets at query time, grouped by identity payload. The
//! projection runs over a consistent snapshot, so a query never observes a
//! partially applied transition.

use crate::auth_set::AuthSet;
use keyward_core::{AuthStatus, DeviceId};
use serde::{Deserialize, Serialize};

/// Device-level view over one or more authentication sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Deterministic device id shared by all sets for this identity.
    pub id: DeviceId,

    /// The identity payload the grouped sets were submitted with.
    pub identity_data: String,

    /// Aggregated status of the device's sets.
    pub status: AuthStatus,

    /// The constituent authentication sets, in submission order.
    pub auth_sets: Vec<AuthSet>,
}

impl Device {
    /// Aggregates the status of a device's sets.
    ///
    /// Precedence: `accepted > preauthorized > pending > rejected`. A device
    /// with any accepted set is trusted; a device whose every set was
    /// rejected is rejected.
    #[must_use]
    pub fn aggregate_status(sets: &[AuthSet]) -> AuthStatus {
        let mut result = AuthStatus::Rejected;
        for set in sets {
            match set.status {
                AuthStatus::Accepted => return AuthStatus::Accepted,
                AuthStatus::Preauthorized => result = AuthStatus::Preauthorized,
                AuthStatus::Pending if result != AuthStatus::Preauthorized => {
                    result = AuthStatus::Pending;
                }
                _ => {}
            }
        }
        result
    }

    /// Projects a snapshot of authentication sets into devices.
    ///
    /// Sets must be given in submission order; devices come out ordered by
    /// the first submission of each identity, with their sets in order.
    #[must_use]
    pub fn project(sets: Vec<AuthSet>) -> Vec<Device> {
        let mut devices: Vec<Device> = Vec::new();
        for set in sets {
            match devices.iter_mut().find(|d| d.id == set.device_id) {
                Some(device) => device.auth_sets.push(set),
                None => devices.push(Device {
                    id: set.device_id,
                    identity_data: set.identity_data.clone(),
                    status: set.status,
                    auth_sets: vec![set],
                }),
            }
        }
        for device in &mut devices {
            device.status = Self::aggregate_status(&device.auth_sets);
        }
        devices
    }
}

/// Filter and pagination options for device listing: an optional status
/// filter plus skip/limit windowing expressed as pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceFilter {
    /// Only return devices whose aggregated status matches.
    pub status: Option<AuthStatus>,
    /// 1-based page number; `None` disables pagination.
    pub page: Option<u32>,
    /// Page size; only meaningful together with `page`.
    pub per_page: Option<u32>,
}

impl DeviceFilter {
    /// Applies the filter to an already-projected device list.
    #[must_use]
    pub fn apply(&self, devices: Vec<Device>) -> Vec<Device> {
        let filtered: Vec<Device> = match self.status {
            Some(status) => devices.into_iter().filter(|d| d.status == status).collect(),
            None => devices,
        };

        match self.page {
            Some(page) => {
                let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE) as usize;
                let skip = (page.max(1) as usize - 1) * per_page;
                filtered.into_iter().skip(skip).take(per_page).collect()
            }
            None => filtered,
        }
    }
}

/// Page size used when a page is requested without an explicit size.
const DEFAULT_PER_PAGE: u32 = 20;

//! Error types for the keyward-store crate.

use keyward_core::{AuthSetId, DeviceId, TransitionError};
use thiserror::Error;

/// Registry operation errors.
///
/// Lookups are always scoped to the caller's partition, so a set living in
/// another tenant's partition produces the same `AuthSetNotFound` as an id
/// that exists nowhere — cross-tenant access never reveals foreign data.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No authentication set with this id exists in the caller's partition.
    #[error("authentication set not found: {0}")]
    AuthSetNotFound(AuthSetId),

    /// No device with this id exists in the caller's partition.
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),

    /// The requested status change was rejected by the transition rules.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// An authentication set for this (identity, key) pair already exists.
    ///
    /// The stored entry is left untouched.
    #[error("authentication set already exists for this identity and key: {existing}")]
    DuplicateAuthSet {
        /// The id of the pre-existing set.
        existing: AuthSetId,
    },
}

impl StoreError {
    /// Check if this error belongs to the not-found class.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::AuthSetNotFound(_) | StoreError::DeviceNotFound(_)
        )
    }

    /// Check if this error belongs to the conflict class.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        match self {
            StoreError::Transition(e) => e.is_conflict(),
            StoreError::DuplicateAuthSet { .. } => true,
            _ => false,
        }
    }

    /// Check if this error belongs to the validation class.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            StoreError::Transition(e) => e.is_validation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyward_core::AuthStatus;

    #[test]
    fn test_not_found_classification() {
        let err = StoreError::AuthSetNotFound(AuthSetId::new());
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_transition_classification() {
        let conflict = StoreError::Transition(TransitionError::InvalidSource {
            current: AuthStatus::Pending,
            target: AuthStatus::Accepted,
        });
        assert!(conflict.is_conflict());
        assert!(!conflict.is_validation());

        let validation = StoreError::Transition(TransitionError::InvalidTarget {
            target: AuthStatus::Rejected,
        });
        assert!(validation.is_validation());
        assert!(!validation.is_conflict());
    }

    #[test]
    fn test_duplicate_is_conflict() {
        let err = StoreError::DuplicateAuthSet {
            existing: AuthSetId::new(),
        };
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }
}

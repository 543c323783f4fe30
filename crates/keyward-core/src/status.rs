//! Authentication-set lifecycle status and transition rules.
//!
//! This module provides [`AuthStatus`], the lifecycle status of an
//! authentication set, and the transition-validation functions that are the
//! single authority on which status changes are legal. Handlers never
//! compare status strings themselves; wrong transitions here would grant
//! device trust incorrectly, so the rules live in one place and return a
//! typed result.
//!
//! # Serialization
//!
//! Statuses serialize to `snake_case` strings:
//!
//! ```rust
//! use keyward_core::AuthStatus;
//!
//! let json = serde_json::to_string(&AuthStatus::Preauthorized).unwrap();
//! assert_eq!(json, "\"preauthorized\"");
//!
//! let status: AuthStatus = serde_json::from_str("\"pending\"").unwrap();
//! assert_eq!(status, AuthStatus::Pending);
//! ```
//!
//! # String Parsing
//!
//! ```rust
//! use keyward_core::AuthStatus;
//!
//! let s1: AuthStatus = "accepted".parse().unwrap();
//! let s2: AuthStatus = "REJECTED".parse().unwrap(); // case-insensitive
//! assert!("bogus".parse::<AuthStatus>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an authentication set.
///
/// An authentication set enters the registry either as `Pending` (device
/// bootstrap submission) or `Preauthorized` (operator bypass); it leaves
/// those states only through the operations validated below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// Submitted by a device and awaiting an admission decision.
    Pending,

    /// Registered by an operator ahead of the device's first request.
    /// The only state from which the status-change operation may accept.
    Preauthorized,

    /// Trusted; the device may obtain authentication tokens.
    Accepted,

    /// Denied; the set stays on record but grants nothing.
    Rejected,
}

impl AuthStatus {
    /// Returns all recognized statuses.
    #[must_use]
    pub fn all() -> &'static [AuthStatus] {
        &[
            AuthStatus::Pending,
            AuthStatus::Preauthorized,
            AuthStatus::Accepted,
            AuthStatus::Rejected,
        ]
    }

    /// Returns the string representation used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthStatus::Pending => "pending",
            AuthStatus::Preauthorized => "preauthorized",
            AuthStatus::Accepted => "accepted",
            AuthStatus::Rejected => "rejected",
        }
    }

    /// Returns true if a device holding a set in this status is trusted.
    #[must_use]
    pub fn is_trusted(&self) -> bool {
        matches!(self, AuthStatus::Accepted)
    }

    /// Returns true if this status still awaits an operator action.
    #[must_use]
    pub fn awaits_review(&self) -> bool {
        matches!(self, AuthStatus::Pending | AuthStatus::Preauthorized)
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AuthStatus::Pending),
            "preauthorized" => Ok(AuthStatus::Preauthorized),
            "accepted" => Ok(AuthStatus::Accepted),
            "rejected" => Ok(AuthStatus::Rejected),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized status string.
///
/// # Example
///
/// ```rust
/// use keyward_core::AuthStatus;
/// use std::str::FromStr;
///
/// let err = AuthStatus::from_str("bogus").unwrap_err();
/// let msg = err.to_string();
/// assert!(msg.contains("invalid status"));
/// assert!(msg.contains("bogus"));
/// assert!(msg.contains("preauthorized"));
/// ```
#[derive(Debug, Clone)]
pub struct StatusParseError(pub String);

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid status '{}': expected one of: pending, preauthorized, accepted, rejected",
            self.0
        )
    }
}

impl std::error::Error for StatusParseError {}

/// A rejected status transition.
///
/// The two variants carry different failure semantics and map to different
/// HTTP classes at the API boundary:
///
/// - [`TransitionError::InvalidTarget`] — the request itself is malformed
///   (validation class, 400): the destination is not one this operation can
///   ever reach, regardless of the set's current state.
/// - [`TransitionError::InvalidSource`] — the request is well-formed but the
///   set's current state forbids it (conflict class, 409): the caller should
///   re-fetch state before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The destination status is not reachable through this operation.
    #[error("status '{target}' is not a valid destination for this operation")]
    InvalidTarget {
        /// The requested destination status.
        target: AuthStatus,
    },

    /// The set's current status does not permit this transition.
    #[error("cannot change status from '{current}' to '{target}'")]
    InvalidSource {
        /// The status the set currently holds.
        current: AuthStatus,
        /// The requested destination status.
        target: AuthStatus,
    },
}

impl TransitionError {
    /// Returns true if this is the validation class (bad request shape).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, TransitionError::InvalidTarget { .. })
    }

    /// Returns true if this is the conflict class (wrong current state).
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, TransitionError::InvalidSource { .. })
    }
}

impl AuthStatus {
    /// Validates the status-change operation (`preauthorized -> accepted`).
    ///
    /// The two checks are independent: an invalid destination fails with the
    /// validation class even when the source would also be wrong, and a
    /// valid destination against a wrong source fails with the conflict
    /// class. Re-accepting an already-`accepted` set is a conflict, not a
    /// no-op.
    pub fn validate_change(current: AuthStatus, target: AuthStatus) -> Result<(), TransitionError> {
        if target != AuthStatus::Accepted {
            return Err(TransitionError::InvalidTarget { target });
        }
        if current != AuthStatus::Preauthorized {
            return Err(TransitionError::InvalidSource { current, target });
        }
        Ok(())
    }

    /// Validates an admission decision on a pending set
    /// (`pending -> accepted` or `pending -> rejected`).
    pub fn validate_decision(
        current: AuthStatus,
        verdict: AuthStatus,
    ) -> Result<(), TransitionError> {
        if !matches!(verdict, AuthStatus::Accepted | AuthStatus::Rejected) {
            return Err(TransitionError::InvalidTarget { target: verdict });
        }
        if current != AuthStatus::Pending {
            return Err(TransitionError::InvalidSource {
                current,
                target: verdict,
            });
        }
        Ok(())
    }
}

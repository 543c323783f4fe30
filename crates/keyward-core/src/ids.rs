//! Strongly Typed Identifiers
//!
//! This module provides type-safe identifier types for Keyward.
//! Using the newtype pattern, these types prevent accidental misuse of
//! different ID types at compile time.
//!
//! # Example
//!
//! ```
//! use keyward_core::{AuthSetId, DeviceId, TenantId};
//!
//! let set_id = AuthSetId::new();
//! let device_id = DeviceId::from_identity(r#"{"mac":"00:11:22:33:44:55"}"#);
//!
//! // Type safety: cannot pass AuthSetId where DeviceId is expected
//! fn requires_device(id: DeviceId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_device(device_id);
//! // requires_device(set_id); // This would not compile!
//!
//! // Tenant identifiers are caller-assigned strings, not UUIDs
//! let tenant: TenantId = "tenant1".parse().unwrap();
//! assert_eq!(tenant.as_str(), "tenant1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed UUID-backed ID type
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for authentication sets.
    ///
    /// Every (device identity, public key) submission gets its own
    /// authentication set, identified by an opaque UUID unique within
    /// its tenant partition.
    AuthSetId
);

define_id!(
    /// Strongly typed identifier for devices.
    ///
    /// A device aggregates every authentication set submitted for the same
    /// identity payload. Use [`DeviceId::from_identity`] to derive the id
    /// deterministically, so a re-bootstrap with a new key maps to the same
    /// device.
    DeviceId
);

impl DeviceId {
    /// Derives the device id from the opaque identity payload.
    ///
    /// Uses UUID v5 over the identity bytes, so the same identity document
    /// always yields the same device id within and across processes.
    #[must_use]
    pub fn from_identity(identity_data: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, identity_data.as_bytes()))
    }
}

/// Strongly typed identifier for tenants.
///
/// Tenant identifiers are caller-assigned, non-empty strings (e.g.
/// `"tenant1"`), not UUIDs: the tenant-management service owns the
/// namespace and this backend only needs the id to name the tenant's
/// isolated partition.
///
/// # Example
///
/// ```
/// use keyward_core::TenantId;
///
/// let tenant: TenantId = "acme".parse().unwrap();
/// assert_eq!(tenant.to_string(), "acme");
///
/// // Blank identifiers are rejected
/// assert!("".parse::<TenantId>().is_err());
/// assert!("   ".parse::<TenantId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Creates a tenant id from a raw string, rejecting blank input.
    pub fn parse(raw: impl AsRef<str>) -> std::result::Result<Self, ParseIdError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ParseIdError {
                id_type: "TenantId",
                message: "tenant id must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tenant id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TenantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TenantId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TenantId {
    type Error = ParseIdError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TenantId> for String {
    fn from(id: TenantId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod auth_set_id_tests {
        use super::*;

        #[test]
        fn test_new_creates_valid_id() {
            let id = AuthSetId::new();
            let id_str = id.to_string();
            // UUID format: 8-4-4-4-12 hex digits
            assert_eq!(id_str.len(), 36);
            assert!(id_str.contains('-'));
        }

        #[test]
        fn test_from_uuid_preserves_value() {
            let uuid = Uuid::new_v4();
            let id = AuthSetId::from_uuid(uuid);
            assert_eq!(id.as_uuid(), &uuid);
        }

        #[test]
        fn test_parse_valid_uuid() {
            let id: AuthSetId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
            assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        }

        #[test]
        fn test_parse_invalid_uuid_returns_error() {
            let result: std::result::Result<AuthSetId, _> = "not-a-uuid".parse();
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert_eq!(err.id_type, "AuthSetId");
            assert!(!err.message.is_empty());
        }

        #[test]
        fn test_default_creates_new_id() {
            let id1 = AuthSetId::default();
            let id2 = AuthSetId::default();
            assert_ne!(id1, id2);
        }
    }

    mod device_id_tests {
        use super::*;

        #[test]
        fn test_from_identity_is_deterministic() {
            let identity = r#"{"mac":"00:11:22:33:44:55"}"#;
            let id1 = DeviceId::from_identity(identity);
            let id2 = DeviceId::from_identity(identity);
            assert_eq!(id1, id2);
        }

        #[test]
        fn test_from_identity_differs_per_identity() {
            let id1 = DeviceId::from_identity(r#"{"mac":"aa"}"#);
            let id2 = DeviceId::from_identity(r#"{"mac":"bb"}"#);
            assert_ne!(id1, id2);
        }

        #[test]
        fn test_parse_empty_string_returns_error() {
            let result: std::result::Result<DeviceId, _> = "".parse();
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert_eq!(err.id_type, "DeviceId");
        }
    }

    mod tenant_id_tests {
        use super::*;

        #[test]
        fn test_parse_valid() {
            let id = TenantId::parse("tenant1").unwrap();
            assert_eq!(id.as_str(), "tenant1");
        }

        #[test]
        fn test_parse_trims_whitespace() {
            let id = TenantId::parse("  acme  ").unwrap();
            assert_eq!(id.as_str(), "acme");
        }

        #[test]
        fn test_parse_empty_rejected() {
            assert!(TenantId::parse("").is_err());
            assert!(TenantId::parse("   ").is_err());
        }

        #[test]
        fn test_error_display() {
            let err = TenantId::parse("").unwrap_err();
            let display = err.to_string();
            assert!(display.contains("TenantId"));
            assert!(display.contains("Failed to parse"));
        }

        #[test]
        fn test_can_use_as_hashmap_key() {
            use std::collections::HashMap;

            let mut map: HashMap<TenantId, String> = HashMap::new();
            let id1 = TenantId::parse("tenant1").unwrap();
            let id2 = TenantId::parse("tenant2").unwrap();

            map.insert(id1.clone(), "first".to_string());
            map.insert(id2.clone(), "second".to_string());

            assert_eq!(map.get(&id1), Some(&"first".to_string()));
            assert_eq!(map.get(&id2), Some(&"second".to_string()));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_auth_set_id_serde_roundtrip() {
            let original = AuthSetId::new();
            let json = serde_json::to_string(&original).unwrap();
            let deserialized: AuthSetId = serde_json::from_str(&json).unwrap();
            assert_eq!(original, deserialized);
        }

        #[test]
        fn test_serializes_as_plain_string() {
            let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
            let id = AuthSetId::from_uuid(uuid);
            let json = serde_json::to_string(&id).unwrap();
            // Should serialize as plain quoted string, not as object
            assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
        }

        #[test]
        fn test_tenant_id_serde_roundtrip() {
            let original = TenantId::parse("tenant1").unwrap();
            let json = serde_json::to_string(&original).unwrap();
            assert_eq!(json, "\"tenant1\"");
            let deserialized: TenantId = serde_json::from_str(&json).unwrap();
            assert_eq!(original, deserialized);
        }

        #[test]
        fn test_tenant_id_deserialize_rejects_empty() {
            let result: std::result::Result<TenantId, _> = serde_json::from_str("\"\"");
            assert!(result.is_err());
        }
    }
}

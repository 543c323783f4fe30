//! Request/response models for the management API surface.

use keyward_core::AuthStatus;
use keyward_store::DeviceFilter;
use serde::Deserialize;

use crate::error::DevicesApiError;

/// Request body for `POST /devices` (preauthorization).
#[derive(Debug, Clone, Deserialize)]
pub struct PreauthorizeRequest {
    /// Opaque identity payload of the device being preauthorized.
    pub identity_data: String,
    /// Public key the device will present.
    pub public_key: String,
}

impl PreauthorizeRequest {
    /// Validates the request, returning an error message on failure.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.identity_data.trim().is_empty() {
            return Some("identity_data must not be empty".to_string());
        }
        if self.public_key.trim().is_empty() {
            return Some("public_key must not be empty".to_string());
        }
        None
    }
}

/// Request body for `PUT /devices/{id}/status`.
///
/// The status travels as a raw string so unrecognized values surface as
/// validation errors with the taxonomy's shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusRequest {
    /// Requested destination status.
    pub status: String,
}

/// Request body for `POST /devices/{id}/decision`.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
    /// Admission verdict: `accepted` or `rejected`.
    pub status: String,
}

/// Query parameters for `GET /devices`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceListQuery {
    /// Only list devices with this aggregated status.
    pub status: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl DeviceListQuery {
    /// Converts the query into a store filter.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unrecognized status value.
    pub fn to_filter(&self) -> Result<DeviceFilter, DevicesApiError> {
        let status = match &self.status {
            Some(raw) => Some(
                raw.parse::<AuthStatus>()
                    .map_err(|e| DevicesApiError::Validation(e.to_string()))?,
            ),
            None => None,
        };
        Ok(DeviceFilter {
            status,
            page: self.page,
            per_page: self.per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preauthorize_validation() {
        let request = PreauthorizeRequest {
            identity_data: r#"{"mac":"preauth-mac"}"#.to_string(),
            public_key: "preauth-key".to_string(),
        };
        assert!(request.validate().is_none());

        let request = PreauthorizeRequest {
            identity_data: "  ".to_string(),
            public_key: "preauth-key".to_string(),
        };
        assert!(request.validate().is_some());
    }

    #[test]
    fn test_query_to_filter() {
        let query = DeviceListQuery {
            status: Some("pending".to_string()),
            page: Some(2),
            per_page: Some(10),
        };
        let filter = query.to_filter().unwrap();
        assert_eq!(filter.status, Some(AuthStatus::Pending));
        assert_eq!(filter.page, Some(2));
        assert_eq!(filter.per_page, Some(10));
    }

    #[test]
    fn test_query_bogus_status_rejected() {
        let query = DeviceListQuery {
            status: Some("bogus".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.to_filter(),
            Err(DevicesApiError::Validation(_))
        ));
    }

    #[test]
    fn test_query_empty_is_passthrough() {
        let filter = DeviceListQuery::default().to_filter().unwrap();
        assert!(filter.status.is_none());
        assert!(filter.page.is_none());
    }
}

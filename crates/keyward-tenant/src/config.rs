//! Configuration for the tenant middleware.

/// Default header carrying the tenant scope.
const DEFAULT_HEADER: &str = "X-Keyward-Tenant";

/// Configuration for tenant-context extraction.
///
/// # Example
///
/// ```
/// use keyward_tenant::TenantConfig;
///
/// let config = TenantConfig::builder()
///     .header_name("X-Org-ID")
///     .require_tenant(true)
///     .build();
///
/// assert_eq!(config.header_name, "X-Org-ID");
/// assert!(config.require_tenant);
/// ```
#[derive(Debug, Clone)]
pub struct TenantConfig {
    /// Header name the tenant id is read from.
    pub header_name: String,
    /// When true, requests without tenant scope are rejected with 401.
    /// When false (the default), unscoped requests run against the default
    /// partition.
    pub require_tenant: bool,
}

impl TenantConfig {
    /// Creates a builder with the defaults.
    #[must_use]
    pub fn builder() -> TenantConfigBuilder {
        TenantConfigBuilder::default()
    }
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_HEADER.to_string(),
            require_tenant: false,
        }
    }
}

/// Builder for [`TenantConfig`].
#[derive(Debug, Default)]
pub struct TenantConfigBuilder {
    header_name: Option<String>,
    require_tenant: Option<bool>,
}

impl TenantConfigBuilder {
    /// Sets the header name the tenant id is read from.
    #[must_use]
    pub fn header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = Some(name.into());
        self
    }

    /// Sets whether requests without tenant scope are rejected.
    #[must_use]
    pub fn require_tenant(mut self, require: bool) -> Self {
        self.require_tenant = Some(require);
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> TenantConfig {
        let defaults = TenantConfig::default();
        TenantConfig {
            header_name: self.header_name.unwrap_or(defaults.header_name),
            require_tenant: self.require_tenant.unwrap_or(defaults.require_tenant),
        }
    }
}

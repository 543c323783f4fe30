//! Application state for the internal API surface.

use keyward_store::DeviceRegistry;

/// Shared state handed to every internal API handler.
#[derive(Clone)]
pub struct InternalApiState {
    /// The partition-per-tenant authentication-set registry.
    pub registry: DeviceRegistry,
}

impl InternalApiState {
    /// Creates the state around a registry handle.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self { registry }
    }
}

//! Handlers for the internal API surface.

mod devices;
mod status;
mod tenants;

pub use devices::submit_auth_set_handler;
pub use status::change_status_handler;
pub use tenants::create_tenant_handler;

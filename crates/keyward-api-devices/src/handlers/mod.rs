//! Handlers for the management API surface.

mod decision;
mod list;
mod preauthorize;
mod status;

pub use decision::decision_handler;
pub use list::{get_device_handler, list_devices_handler};
pub use preauthorize::preauthorize_handler;
pub use status::change_status_handler;

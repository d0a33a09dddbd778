//! drivectl: list, locate, and upload files in a Google Drive folder tree.
//!
//! The library is a thin, synchronous controller over one authenticated
//! provider session. Lookups are single-page (continuation tokens are never
//! followed) and uploads replace same-named files by delete-then-create.

use std::path::Path;

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{DriveController, load_config};
pub use domain::{AppError, DriveConfig, RemoteEntry};
pub use ports::TokenProvider;

/// Build a controller from `drivectl.toml` (or defaults when absent) and the
/// credential source the configuration names.
pub fn controller(
    config_path: Option<&Path>,
) -> Result<DriveController<Box<dyn TokenProvider>>, AppError> {
    let config = load_config(config_path)?;
    Ok(DriveController::from_config(config))
}

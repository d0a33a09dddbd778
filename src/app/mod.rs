mod config;
mod controller;

pub use config::{CONFIG_FILE_NAME, load_config};
pub use controller::DriveController;

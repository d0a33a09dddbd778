//! Configuration loading for the drivectl host.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DriveConfig};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "drivectl.toml";

/// Load configuration from `path`, or from `drivectl.toml` in the current
/// directory when no path is given.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// path is an error.
pub fn load_config(path: Option<&Path>) -> Result<DriveConfig, AppError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE_NAME), false),
    };

    if !path.exists() {
        if explicit {
            return Err(AppError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(DriveConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    DriveConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[api]\npage_size = 50\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.api.page_size, 50);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/drivectl.toml")));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[api\n").unwrap();

        let result = load_config(Some(&path));

        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }
}

//! Controller configuration models.

use std::path::PathBuf;

use serde::Deserialize;

use super::AppError;

/// Configuration for the drivectl controller loaded from `drivectl.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriveConfig {
    /// Drive API endpoint settings.
    #[serde(default)]
    pub api: DriveApiConfig,
    /// Credential bootstrap settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl DriveConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }
}

/// Drive API endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveApiConfig {
    /// Base URL for metadata operations.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for content uploads.
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    /// Page size for listing calls. Listings never follow continuation
    /// tokens, so this also bounds every result set.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for DriveApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_url: default_upload_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_upload_url() -> String {
    "https://www.googleapis.com/upload/drive/v3".to_string()
}

fn default_page_size() -> u32 {
    1000
}

fn default_timeout() -> u64 {
    30
}

/// Credential bootstrap settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Path to a cached token store written by an external authorization
    /// flow. When absent, the `DRIVE_ACCESS_TOKEN` environment variable is
    /// used instead.
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

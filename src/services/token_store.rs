//! Credential sources for the controller session.
//!
//! The authorization flow itself lives outside this crate; these providers
//! only read tokens an external flow has already produced.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, AuthConfig};
use crate::ports::TokenProvider;

/// Environment variable holding a bearer token.
pub const DRIVE_ACCESS_TOKEN: &str = "DRIVE_ACCESS_TOKEN";

/// Bearer token sourced from the `DRIVE_ACCESS_TOKEN` environment variable.
#[derive(Debug, Clone, Default)]
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn access_token(&self) -> Result<String, AppError> {
        std::env::var(DRIVE_ACCESS_TOKEN).map_err(|_| {
            AppError::Configuration(format!("{DRIVE_ACCESS_TOKEN} environment variable not set"))
        })
    }
}

/// Bearer token read from a cached token store on disk.
///
/// The store is the JSON file an external authorization flow leaves behind
/// (`{"access_token": "..."}`).
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Read tokens from the store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Deserialize)]
struct CachedToken {
    #[serde(default)]
    access_token: String,
}

impl TokenProvider for FileTokenStore {
    fn access_token(&self) -> Result<String, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read token store {}: {e}",
                self.path.display()
            ))
        })?;

        let cached: CachedToken = serde_json::from_str(&content).map_err(|e| {
            AppError::Configuration(format!(
                "Malformed token store {}: {e}",
                self.path.display()
            ))
        })?;

        if cached.access_token.is_empty() {
            return Err(AppError::Configuration(format!(
                "Token store {} holds no access token",
                self.path.display()
            )));
        }

        Ok(cached.access_token)
    }
}

/// Select the credential source the configuration names.
pub fn token_provider_from(auth: &AuthConfig) -> Box<dyn TokenProvider> {
    match &auth.token_file {
        Some(path) => Box::new(FileTokenStore::new(path.clone())),
        None => Box::new(EnvTokenProvider),
    }
}

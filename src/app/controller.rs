//! The controller fronting one authenticated Drive session.

use std::sync::OnceLock;

use crate::domain::{AppError, DriveConfig, RemoteEntry};
use crate::ports::TokenProvider;
use crate::services::{HttpDriveClient, locator, token_provider_from, transfer};

/// Synchronous controller over one authenticated Drive session.
///
/// Every operation is request-scoped: one or more blocking round trips to
/// the provider, no caching, no retries, no background work. The only
/// instance state is the HTTP client handle, created on first use and
/// reused for the lifetime of the controller instance.
pub struct DriveController<A: TokenProvider> {
    config: DriveConfig,
    auth: A,
    client: OnceLock<HttpDriveClient>,
}

impl<A: TokenProvider> DriveController<A> {
    /// Create a controller with an injected credential source.
    pub fn new(config: DriveConfig, auth: A) -> Self {
        Self { config, auth, client: OnceLock::new() }
    }

    /// The memoized client handle, built on first access.
    fn client(&self) -> Result<&HttpDriveClient, AppError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let token = self.auth.access_token()?;
        let client = HttpDriveClient::new(token, &self.config.api)?;
        Ok(self.client.get_or_init(|| client))
    }

    fn page_size(&self) -> u32 {
        self.config.api.page_size
    }

    /// List every entry visible to the session, up to one page.
    pub fn list_all(&self) -> Result<Vec<RemoteEntry>, AppError> {
        locator::list_all(self.client()?, self.page_size())
    }

    /// List the entries contained in a folder.
    pub fn list_in_folder(&self, folder_id: &str) -> Result<Vec<RemoteEntry>, AppError> {
        locator::list_in_folder(self.client()?, folder_id, self.page_size())
    }

    /// List every non-trashed folder visible to the session.
    pub fn list_all_folders(&self) -> Result<Vec<RemoteEntry>, AppError> {
        locator::list_all_folders(self.client()?, self.page_size())
    }

    /// Check whether a file exists; absence is an [`AppError::NotFound`]
    /// failure rather than `Ok(false)`.
    pub fn file_exists(&self, name: &str) -> Result<bool, AppError> {
        locator::file_exists(self.client()?, name, self.page_size())
    }

    /// Check whether a folder exists.
    pub fn directory_exists(&self, name: &str) -> Result<bool, AppError> {
        locator::directory_exists(self.client()?, name, self.page_size())
    }

    /// Resolve the id of a file or folder by name.
    pub fn resolve_id(&self, name: &str, is_directory: bool) -> Result<Option<String>, AppError> {
        locator::resolve_id(self.client()?, name, is_directory, self.page_size())
    }

    /// Size of the first entry in the folder named `name`.
    pub fn file_size(&self, name: &str) -> Result<u64, AppError> {
        locator::file_size(self.client()?, name, self.page_size())
    }

    /// Upload `content` into a folder, replacing any same-named file.
    ///
    /// Returns the provider-assigned id of the new file.
    pub fn upload(
        &self,
        content: Vec<u8>,
        destination_name: &str,
        folder_id: &str,
        uploaded_by: Option<&str>,
    ) -> Result<String, AppError> {
        transfer::upsert(
            self.client()?,
            content,
            destination_name,
            folder_id,
            uploaded_by,
            self.page_size(),
        )
    }
}

impl DriveController<Box<dyn TokenProvider>> {
    /// Controller using the credential source named in the configuration.
    pub fn from_config(config: DriveConfig) -> Self {
        let auth = token_provider_from(&config.auth);
        Self::new(config, auth)
    }
}

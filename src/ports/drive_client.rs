//! Storage provider transport port.

use crate::domain::{AppError, Query, RemoteEntry};

/// Parameters for one single-page listing call.
#[derive(Debug, Clone)]
pub struct ListRequest {
    /// Filter expression, or `None` to list everything visible.
    pub query: Option<Query>,
    /// Maximum number of entries on the page.
    pub page_size: u32,
    /// Provider field selector, or `None` for the provider default.
    pub fields: Option<String>,
}

/// Metadata for a file about to be created.
#[derive(Debug, Clone)]
pub struct NewFileMetadata {
    /// Destination name.
    pub name: String,
    /// Ids of the folders the file is created in.
    pub parents: Vec<String>,
    /// Content type recorded on the remote entry.
    pub mime_type: String,
    /// Free-text description shown in the provider UI.
    pub description: Option<String>,
}

/// Port for provider file operations.
///
/// One call here is one outbound round trip: implementations do not retry,
/// cache, or paginate. `list` returns a single page even when the provider
/// reports more results.
pub trait DriveClient {
    /// One page of entries matching the request, in provider order.
    fn list(&self, request: &ListRequest) -> Result<Vec<RemoteEntry>, AppError>;

    /// Permanently delete the entry with the given id.
    fn delete(&self, entry_id: &str) -> Result<(), AppError>;

    /// Create a new file from metadata and content.
    ///
    /// Returns the provider-assigned id.
    fn create(&self, metadata: &NewFileMetadata, content: Vec<u8>) -> Result<String, AppError>;
}

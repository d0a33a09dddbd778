//! Upload-or-replace for remote files.

use chrono::Utc;

use crate::domain::{AppError, Query};
use crate::ports::{DriveClient, ListRequest, NewFileMetadata};

use super::locator::ID_NAME_FIELDS;

/// Upload `content` as `destination_name` into `folder_id`, replacing any
/// existing file with that name.
///
/// The replace is delete-then-create, not an atomic swap: when the create
/// fails after the delete succeeded, neither the old nor the new file is
/// left in place. Nothing is retried; every failure propagates.
///
/// Returns the provider-assigned id of the new file.
pub fn upsert<C: DriveClient>(
    client: &C,
    content: Vec<u8>,
    destination_name: &str,
    folder_id: &str,
    uploaded_by: Option<&str>,
    page_size: u32,
) -> Result<String, AppError> {
    let query = Query::builder()
        .exclude_trashed()
        .name(destination_name)
        .parent(folder_id)
        .build();
    let existing = client.list(&ListRequest {
        query: Some(query),
        page_size,
        fields: Some(ID_NAME_FIELDS.to_string()),
    })?;

    if let Some(previous) = existing.first() {
        client.delete(&previous.id)?;
    }

    let metadata = NewFileMetadata {
        name: destination_name.to_string(),
        parents: vec![folder_id.to_string()],
        mime_type: mime_for(destination_name),
        description: Some(upload_description(uploaded_by)),
    };

    client.create(&metadata, content)
}

/// MIME type recorded on an upload, derived from the destination name's
/// extension.
pub fn mime_for(file_name: &str) -> String {
    mime_guess::from_path(file_name).first_or_octet_stream().essence_str().to_string()
}

fn upload_description(uploaded_by: Option<&str>) -> String {
    let mut description =
        format!("Uploaded on {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    if let Some(who) = uploaded_by {
        description.push_str(", Uploaded by ");
        description.push_str(who);
    }
    description
}

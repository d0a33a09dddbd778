//! Remote entry lookup and existence resolution.
//!
//! Every function here issues single-page listing calls through the
//! [`DriveClient`] port and never follows continuation tokens: a result set
//! beyond one page is truncated at the page boundary. Nothing is cached
//! between calls, including between the two round trips of [`resolve_id`].

use crate::domain::{AppError, KindFilter, Query, RemoteEntry};
use crate::ports::{DriveClient, ListRequest};

/// Field selector for id/name lookups.
pub(crate) const ID_NAME_FIELDS: &str = "nextPageToken, files(id, name)";
/// Field selector for the folder catalog.
const CATALOG_FIELDS: &str = "nextPageToken, files(name, size, id, parents)";
/// Field selector for size lookups.
const SIZE_FIELDS: &str = "nextPageToken, files(name, size)";

/// List every entry visible to the session, up to one page.
pub fn list_all<C: DriveClient>(client: &C, page_size: u32) -> Result<Vec<RemoteEntry>, AppError> {
    client.list(&ListRequest { query: None, page_size, fields: None })
}

/// List the entries contained in the folder with the given id.
pub fn list_in_folder<C: DriveClient>(
    client: &C,
    folder_id: &str,
    page_size: u32,
) -> Result<Vec<RemoteEntry>, AppError> {
    let query = Query::builder().parent(folder_id).build();
    client.list(&ListRequest {
        query: Some(query),
        page_size,
        fields: Some(ID_NAME_FIELDS.to_string()),
    })
}

/// List every non-trashed folder visible to the session.
pub fn list_all_folders<C: DriveClient>(
    client: &C,
    page_size: u32,
) -> Result<Vec<RemoteEntry>, AppError> {
    let query = Query::builder().kind(KindFilter::Folder).exclude_trashed().build();
    client.list(&ListRequest {
        query: Some(query),
        page_size,
        fields: Some(CATALOG_FIELDS.to_string()),
    })
}

/// Check whether a file with the given name exists.
///
/// Zero matches is a [`AppError::NotFound`] failure, not `Ok(false)`:
/// callers probing for a file receive the absence as control flow.
/// [`directory_exists`] is the symmetric boolean variant for folders; the
/// two are deliberately distinct operations.
pub fn file_exists<C: DriveClient>(
    client: &C,
    name: &str,
    page_size: u32,
) -> Result<bool, AppError> {
    let query = Query::builder().kind(KindFilter::NotFolder).name(name).build();
    let matches = client.list(&ListRequest { query: Some(query), page_size, fields: None })?;

    if matches.is_empty() {
        return Err(AppError::NotFound(name.to_string()));
    }
    Ok(true)
}

/// Check whether a folder with the given name exists.
pub fn directory_exists<C: DriveClient>(
    client: &C,
    name: &str,
    page_size: u32,
) -> Result<bool, AppError> {
    let query = Query::builder().kind(KindFilter::Folder).name(name).build();
    let matches = client.list(&ListRequest { query: Some(query), page_size, fields: None })?;

    Ok(!matches.is_empty())
}

/// Resolve the id of a file or folder by name.
///
/// Runs the corresponding existence check first, then a second listing call
/// for the id; the two round trips share no state. Ties break on provider
/// order: the first entry on the page wins. A missing folder resolves to
/// `Ok(None)`; a missing file propagates the `NotFound` failure from
/// [`file_exists`].
pub fn resolve_id<C: DriveClient>(
    client: &C,
    name: &str,
    is_directory: bool,
    page_size: u32,
) -> Result<Option<String>, AppError> {
    let kind = if is_directory { KindFilter::Folder } else { KindFilter::NotFolder };

    if is_directory {
        if !directory_exists(client, name, page_size)? {
            return Ok(None);
        }
    } else {
        file_exists(client, name, page_size)?;
    }

    let query = Query::builder().kind(kind).name(name).build();
    let matches = client.list(&ListRequest { query: Some(query), page_size, fields: None })?;

    Ok(matches.into_iter().next().map(|entry| entry.id))
}

/// Size of the first entry in the folder named `name`.
///
/// Resolves `name` as a folder, lists its non-trashed children, and reports
/// the first entry's size; remaining entries are ignored, and an empty
/// folder or a sizeless first entry reports 0.
pub fn file_size<C: DriveClient>(
    client: &C,
    name: &str,
    page_size: u32,
) -> Result<u64, AppError> {
    let folder_id = resolve_id(client, name, true, page_size)?
        .ok_or_else(|| AppError::NotFound(name.to_string()))?;

    let query = Query::builder().exclude_trashed().parent(&folder_id).build();
    let entries = client.list(&ListRequest {
        query: Some(query),
        page_size,
        fields: Some(SIZE_FIELDS.to_string()),
    })?;

    Ok(entries.first().and_then(|entry| entry.size).unwrap_or(0))
}

//! Drive API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, DriveApiConfig, RemoteEntry};
use crate::ports::{DriveClient, ListRequest, NewFileMetadata};

const MULTIPART_BOUNDARY: &str = "drivectl_upload_boundary";

/// HTTP client for the Drive v3 API, bound to one authenticated session.
#[derive(Clone)]
pub struct HttpDriveClient {
    access_token: String,
    files_url: Url,
    upload_files_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpDriveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDriveClient")
            .field("files_url", &self.files_url)
            .field("upload_files_url", &self.upload_files_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl HttpDriveClient {
    /// Create a new HTTP client with the given bearer token and configuration.
    pub fn new(access_token: String, config: &DriveApiConfig) -> Result<Self, AppError> {
        let files_url = endpoint(&config.base_url, "files")?;
        let upload_files_url = endpoint(&config.upload_url, "files")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { access_token, files_url, upload_files_url, client })
    }
}

fn endpoint(base: &str, segment: &str) -> Result<Url, AppError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), segment);
    Url::parse(&joined)
        .map_err(|e| AppError::Configuration(format!("Invalid API base URL '{base}': {e}")))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListPage {
    #[serde(default)]
    files: Vec<FileDto>,
    /// Continuation token. Listings are single-page; the token is parsed and
    /// discarded, truncating any result set beyond one page.
    #[serde(default)]
    #[allow(dead_code)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileDto {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "deserialize_size")]
    size: Option<u64>,
    #[serde(default)]
    parents: Vec<String>,
}

impl From<FileDto> for RemoteEntry {
    fn from(value: FileDto) -> Self {
        RemoteEntry { id: value.id, name: value.name, size: value.size, parents: value.parents }
    }
}

// Drive serializes int64 fields as JSON strings.
fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSize {
        Number(u64),
        Text(String),
    }

    match Option::<RawSize>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawSize::Number(value)) => Ok(Some(value)),
        Some(RawSize::Text(text)) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileMetadataDto<'a> {
    name: &'a str,
    parents: &'a [String],
    mime_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CreatedFile {
    id: String,
}

impl DriveClient for HttpDriveClient {
    fn list(&self, request: &ListRequest) -> Result<Vec<RemoteEntry>, AppError> {
        let mut params: Vec<(&str, String)> = vec![("pageSize", request.page_size.to_string())];
        if let Some(query) = &request.query {
            params.push(("q", query.as_str().to_string()));
        }
        if let Some(fields) = &request.fields {
            params.push(("fields", fields.clone()));
        }

        let response = self
            .client
            .get(self.files_url.clone())
            .bearer_auth(&self.access_token)
            .query(&params)
            .send()
            .map_err(|e| AppError::Transport(format!("List request failed: {e}")))?;

        let response = error_for_status(response)?;
        let page: FileListPage = response
            .json()
            .map_err(|e| AppError::Transport(format!("Failed to parse list response: {e}")))?;

        Ok(page.files.into_iter().map(RemoteEntry::from).collect())
    }

    fn delete(&self, entry_id: &str) -> Result<(), AppError> {
        let url = Url::parse(&format!("{}/{entry_id}", self.files_url))
            .map_err(|e| AppError::Configuration(format!("Invalid entry id '{entry_id}': {e}")))?;

        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.access_token)
            .send()
            .map_err(|e| AppError::Transport(format!("Delete request failed: {e}")))?;

        error_for_status(response)?;
        Ok(())
    }

    fn create(&self, metadata: &NewFileMetadata, content: Vec<u8>) -> Result<String, AppError> {
        let dto = FileMetadataDto {
            name: &metadata.name,
            parents: &metadata.parents,
            mime_type: &metadata.mime_type,
            description: metadata.description.as_deref(),
        };
        let metadata_json = serde_json::to_string(&dto)
            .map_err(|e| AppError::Configuration(format!("Failed to encode file metadata: {e}")))?;

        let body = multipart_related_body(&metadata_json, &metadata.mime_type, &content);

        let response = self
            .client
            .post(self.upload_files_url.clone())
            .query(&[("uploadType", "multipart"), ("fields", "id")])
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, format!("multipart/related; boundary={MULTIPART_BOUNDARY}"))
            .body(body)
            .send()
            .map_err(|e| AppError::Transport(format!("Upload request failed: {e}")))?;

        let response = error_for_status(response)?;
        let created: CreatedFile = response
            .json()
            .map_err(|e| AppError::Transport(format!("Failed to parse upload response: {e}")))?;

        Ok(created.id)
    }
}

fn error_for_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Api { status: status.as_u16(), message })
}

// The metadata part carries the JSON resource, the second part the raw bytes.
fn multipart_related_body(metadata_json: &str, mime_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata_json.len() + content.len() + 256);
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n\
             {metadata_json}\r\n--{MULTIPART_BOUNDARY}\r\nContent-Type: {mime_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

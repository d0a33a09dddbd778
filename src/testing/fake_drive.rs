//! Stateful in-memory stand-in for the storage provider.
//!
//! Evaluates the same filter expressions the real API receives, records the
//! order of calls, and mutates its entry set on delete/create, so tests can
//! assert both call traffic and resulting provider state.

use std::sync::Mutex;

use crate::domain::{AppError, FOLDER_MIME_TYPE, Query, RemoteEntry};
use crate::ports::{DriveClient, ListRequest, NewFileMetadata};

/// One stored entry in the fake provider.
#[derive(Debug, Clone)]
pub struct FakeEntry {
    pub id: String,
    pub name: String,
    pub folder: bool,
    pub size: Option<u64>,
    pub parents: Vec<String>,
    pub trashed: bool,
}

impl FakeEntry {
    /// A file entry inside one parent folder.
    pub fn file(id: &str, name: &str, parent: &str, size: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            folder: false,
            size: Some(size),
            parents: vec![parent.to_string()],
            trashed: false,
        }
    }

    /// A top-level folder entry.
    pub fn folder(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            folder: true,
            size: None,
            parents: Vec::new(),
            trashed: false,
        }
    }
}

/// Calls observed by the fake, in invocation order.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    List(ListRequest),
    Delete(String),
    Create(String),
}

#[derive(Default)]
struct FakeState {
    entries: Vec<FakeEntry>,
    calls: Vec<RecordedCall>,
    created: Vec<NewFileMetadata>,
    next_id: u32,
}

/// In-memory [`DriveClient`] for unit tests.
#[derive(Default)]
pub struct FakeDrive {
    state: Mutex<FakeState>,
}

impl FakeDrive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the provider state.
    pub fn seed(&self, entry: FakeEntry) {
        self.state.lock().unwrap().entries.push(entry);
    }

    /// Every call observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Ids passed to `delete`, in order.
    pub fn deleted_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Delete(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Metadata passed to `create`, in order.
    pub fn created_metadata(&self) -> Vec<NewFileMetadata> {
        self.state.lock().unwrap().created.clone()
    }

    /// Current entries with the given name under the given parent.
    pub fn entries_named(&self, name: &str, parent: &str) -> Vec<FakeEntry> {
        self.state
            .lock()
            .unwrap()
            .entries
            .iter()
            .filter(|entry| {
                entry.name == name && entry.parents.iter().any(|p| p == parent)
            })
            .cloned()
            .collect()
    }
}

impl DriveClient for FakeDrive {
    fn list(&self, request: &ListRequest) -> Result<Vec<RemoteEntry>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::List(request.clone()));

        let matches = state
            .entries
            .iter()
            .filter(|entry| matches_query(entry, request.query.as_ref()))
            .take(request.page_size as usize)
            .map(|entry| RemoteEntry {
                id: entry.id.clone(),
                name: entry.name.clone(),
                size: entry.size,
                parents: entry.parents.clone(),
            })
            .collect();
        Ok(matches)
    }

    fn delete(&self, entry_id: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::Delete(entry_id.to_string()));

        let before = state.entries.len();
        state.entries.retain(|entry| entry.id != entry_id);
        if state.entries.len() == before {
            return Err(AppError::Api {
                status: 404,
                message: format!("File not found: {entry_id}"),
            });
        }
        Ok(())
    }

    fn create(&self, metadata: &NewFileMetadata, content: Vec<u8>) -> Result<String, AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::Create(metadata.name.clone()));
        state.created.push(metadata.clone());

        state.next_id += 1;
        let id = format!("fake-{}", state.next_id);
        let entry = FakeEntry {
            id: id.clone(),
            name: metadata.name.clone(),
            folder: metadata.mime_type == FOLDER_MIME_TYPE,
            size: Some(content.len() as u64),
            parents: metadata.parents.clone(),
            trashed: false,
        };
        state.entries.push(entry);
        Ok(id)
    }
}

fn matches_query(entry: &FakeEntry, query: Option<&Query>) -> bool {
    let Some(query) = query else { return true };
    if query.as_str().is_empty() {
        return true;
    }
    query.as_str().split(" and ").all(|clause| matches_clause(entry, clause))
}

fn matches_clause(entry: &FakeEntry, clause: &str) -> bool {
    if clause == "trashed = false" {
        !entry.trashed
    } else if let Some(value) = quoted_value(clause, "mimeType = '", "'") {
        entry.folder == (value == FOLDER_MIME_TYPE)
    } else if let Some(value) = quoted_value(clause, "mimeType != '", "'") {
        entry.folder != (value == FOLDER_MIME_TYPE)
    } else if let Some(value) = quoted_value(clause, "name = '", "'") {
        entry.name == unescape(value)
    } else if let Some(value) = quoted_value(clause, "'", "' in parents") {
        let parent = unescape(value);
        entry.parents.iter().any(|p| p == &parent)
    } else {
        false
    }
}

fn quoted_value<'a>(clause: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    clause.strip_prefix(prefix)?.strip_suffix(suffix)
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

//! Provider search-filter construction.
//!
//! Drive selects entries with a string filter expression. Every lookup in
//! this crate goes through [`QueryBuilder`] so that clause order stays fixed
//! and string values are always escaped before interpolation.

use std::fmt;

/// MIME type the provider assigns to folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Entry-kind clause for a listing query.
///
/// The provider has no "file" type; a file is anything that is not a folder,
/// so the negative form is a first-class filter here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// Match folders only (`mimeType =`).
    Folder,
    /// Match anything that is not a folder (`mimeType !=`).
    NotFolder,
}

/// A provider filter expression selecting entries by kind, trash status,
/// name, and/or parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Start building a query clause by clause.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// The filter expression as sent to the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a filter expression.
///
/// Clauses are emitted in a fixed order (kind, trash status, name, parent)
/// and joined with `and`. At most one name clause and one parent clause can
/// be set; setting one again replaces the previous value.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    kind: Option<KindFilter>,
    exclude_trashed: bool,
    name: Option<String>,
    parent: Option<String>,
}

impl QueryBuilder {
    /// Restrict matches to folders or to non-folders.
    pub fn kind(mut self, kind: KindFilter) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Exclude trashed entries from the result.
    pub fn exclude_trashed(mut self) -> Self {
        self.exclude_trashed = true;
        self
    }

    /// Match entries with exactly this name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Match entries contained in the folder with this id.
    pub fn parent(mut self, folder_id: &str) -> Self {
        self.parent = Some(folder_id.to_string());
        self
    }

    /// Assemble the filter expression.
    pub fn build(self) -> Query {
        let mut clauses = Vec::new();

        match self.kind {
            Some(KindFilter::Folder) => {
                clauses.push(format!("mimeType = '{FOLDER_MIME_TYPE}'"));
            }
            Some(KindFilter::NotFolder) => {
                clauses.push(format!("mimeType != '{FOLDER_MIME_TYPE}'"));
            }
            None => {}
        }

        if self.exclude_trashed {
            clauses.push("trashed = false".to_string());
        }

        if let Some(name) = &self.name {
            clauses.push(format!("name = '{}'", escape(name)));
        }

        if let Some(parent) = &self.parent {
            clauses.push(format!("'{}' in parents", escape(parent)));
        }

        Query(clauses.join(" and "))
    }
}

/// Backslash-escape a value for use inside a single-quoted filter literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

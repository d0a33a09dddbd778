/// One file or folder as reported by the storage provider.
///
/// An immutable snapshot scoped to a single request/response round trip.
/// Nothing is cached between calls; the provider is the sole source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    /// Provider-assigned identifier.
    pub id: String,
    /// Display name. Not unique: several entries may share one name.
    pub name: String,
    /// Size in bytes. Absent for folders and for listings that did not
    /// request the size field.
    pub size: Option<u64>,
    /// Ids of the parent folders containing this entry.
    pub parents: Vec<String>,
}

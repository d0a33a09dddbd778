mod config;
mod entry;
mod error;
mod query;

pub use config::{AuthConfig, DriveApiConfig, DriveConfig};
pub use entry::RemoteEntry;
pub use error::AppError;
pub use query::{FOLDER_MIME_TYPE, KindFilter, Query, QueryBuilder};

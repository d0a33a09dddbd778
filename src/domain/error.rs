use std::io;

use thiserror::Error;

/// Library-wide error type for drivectl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or credential bootstrap issue.
    #[error("{0}")]
    Configuration(String),

    /// A file-existence check matched nothing.
    #[error("{0} not found")]
    NotFound(String),

    /// Network-level failure talking to the provider.
    #[error("{0}")]
    Transport(String),

    /// The provider rejected a request.
    #[error("Drive API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

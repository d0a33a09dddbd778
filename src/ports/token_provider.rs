//! Credential bootstrap port.

use crate::domain::AppError;

/// Port for producing the bearer token of one authenticated session.
///
/// The controller treats authentication as an opaque injected collaborator;
/// how the token came to exist (authorization flow, cache file, environment)
/// is not its concern.
pub trait TokenProvider {
    /// A bearer token accepted by the provider API.
    fn access_token(&self) -> Result<String, AppError>;
}

impl TokenProvider for Box<dyn TokenProvider> {
    fn access_token(&self) -> Result<String, AppError> {
        self.as_ref().access_token()
    }
}

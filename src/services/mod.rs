pub mod locator;
pub mod transfer;

mod drive_client_http;
mod token_store;

pub use drive_client_http::HttpDriveClient;
pub use token_store::{DRIVE_ACCESS_TOKEN, EnvTokenProvider, FileTokenStore, token_provider_from};

mod drive_client;
mod token_provider;

pub use drive_client::{DriveClient, ListRequest, NewFileMetadata};
pub use token_provider::TokenProvider;

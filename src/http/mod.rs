pub mod client;
pub mod request;
pub mod request_builder;
pub mod response;

pub use client::{Client, ClientRequestBuilder};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed with status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

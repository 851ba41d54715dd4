//! Client Module
//!
//! Typed HTTP access to the indexing server. The feed dispatcher uses the
//! raw add_document exchange; administrative commands use the typed
//! operations which parse the server's reply shapes.

pub mod connection;

pub use connection::{Exchange, IndexClient};

use thiserror::Error;

/// Errors that can occur when talking to the indexing server
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid server URL '{0}': {1}")]
    InvalidBaseUrl(String, url::ParseError),

    #[error("Invalid endpoint path: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

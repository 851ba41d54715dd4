//! Bulk feed module
//!
//! Loads a JSON array of records from disk and replays it against the
//! server's add_document endpoint, one request per record, in input order.
//! There is no batching, no concurrency, and no retry: a transport failure
//! aborts the run with the remaining records unsent.

pub mod dispatcher;
pub mod source;

pub use dispatcher::{Dispatcher, FeedStats};
pub use source::FeedSource;

use crate::client::ClientError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or replaying a feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read feed file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse feed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feed file '{path}' must contain a top-level JSON array, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

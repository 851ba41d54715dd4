//! DocFeed: bulk document feeder for a search-index HTTP API
//!
//! Client-side tooling for a document indexing server:
//! - load an ordered feed of JSON records from a local file
//! - replay the feed against the server's add_document endpoint, one
//!   request per record, in input order
//! - administrative helpers for creating and listing indices

pub mod client;
pub mod config;
pub mod feed;
pub mod types;

pub use config::Config;
pub use types::*;

//! Wire types shared with the indexing server

use serde::{Deserialize, Serialize};

/// One element of the input feed array, passed to the server verbatim
pub type Record = serde_json::Value;

/// Wrapper object sent as the body of every add_document request.
///
/// Borrows the record so the payload exists only for the duration of one
/// request and the feed itself is never cloned.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    /// The record being indexed, embedded without transformation
    pub data: &'a Record,
}

/// Request body for index creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateIndexRequest {
    /// Name of the index to create
    pub name: String,
    /// Whether term matching in the new index is case sensitive
    pub case_sensitivity: bool,
}

/// Server reply to index creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIndexResult {
    pub success: bool,
}

/// Server reply to the index listing request
#[derive(Debug, Clone, Deserialize)]
pub struct IndicesResult {
    pub indices: Vec<String>,
}

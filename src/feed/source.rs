//! Feed file loading

use super::FeedError;
use crate::types::Record;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// An ordered sequence of records loaded from a JSON feed file.
///
/// The whole file is read into memory up front; records keep the exact
/// values and order of the input array elements.
#[derive(Debug, Clone)]
pub struct FeedSource {
    path: PathBuf,
    records: Vec<Record>,
}

impl FeedSource {
    /// Load a feed from a file containing a top-level JSON array.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref().to_path_buf();

        let content = std::fs::read_to_string(&path).map_err(|source| FeedError::Read {
            path: path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| FeedError::Parse {
            path: path.clone(),
            source,
        })?;

        match value {
            Value::Array(records) => Ok(Self { path, records }),
            other => Err(FeedError::NotAnArray {
                path,
                found: json_type_name(&other),
            }),
        }
    }

    /// Path the feed was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the feed
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the feed contains no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in input order
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_feed(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_open_preserves_order_and_values() {
        let file = write_feed(r#"[{"title": "a"}, "bare string", 7, null]"#);
        let source = FeedSource::open(file.path()).unwrap();

        assert_eq!(source.len(), 4);
        assert_eq!(source.records()[0], json!({"title": "a"}));
        assert_eq!(source.records()[1], json!("bare string"));
        assert_eq!(source.records()[2], json!(7));
        assert_eq!(source.records()[3], json!(null));
    }

    #[test]
    fn test_open_empty_array() {
        let file = write_feed("[]");
        let source = FeedSource::open(file.path()).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_open_rejects_non_array() {
        let file = write_feed(r#"{"data": []}"#);
        let err = FeedSource::open(file.path()).unwrap_err();
        assert!(matches!(
            err,
            FeedError::NotAnArray {
                found: "an object",
                ..
            }
        ));
    }

    #[test]
    fn test_open_rejects_invalid_json() {
        let file = write_feed("[{");
        assert!(matches!(
            FeedSource::open(file.path()),
            Err(FeedError::Parse { .. })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            FeedSource::open("/nonexistent/feed.json"),
            Err(FeedError::Read { .. })
        ));
    }
}

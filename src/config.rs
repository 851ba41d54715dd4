//! Configuration for DocFeed

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default request timeout in seconds
fn default_timeout() -> u64 {
    30
}

/// Default connect timeout in seconds
fn default_connect_timeout() -> u64 {
    10
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    "docfeed/0.1".to_string()
}

fn default_index() -> String {
    "idx1".to_string()
}

/// Connection settings for the indexing server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "http://localhost:8080")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Index used when a command does not name one
    #[serde(default = "default_index")]
    pub default_index: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_index: default_index(),
        }
    }
}

/// Main configuration for DocFeed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Indexing server connection
    #[serde(default)]
    pub server: ServerConfig,
    /// Feed defaults
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass rather than playing whack-a-mole.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.server.base_url.trim().is_empty() {
            errors.push("server.base_url must not be empty".to_string());
        } else if let Err(e) = Url::parse(self.server.base_url.trim()) {
            errors.push(format!(
                "server.base_url '{}' is not a valid URL: {}",
                self.server.base_url, e
            ));
        }

        if self.server.timeout_secs == 0 {
            errors.push("server.timeout_secs must be greater than zero".to_string());
        }

        if self.server.connect_timeout_secs == 0 {
            errors.push("server.connect_timeout_secs must be greater than zero".to_string());
        }

        if self.feed.default_index.trim().is_empty() {
            errors.push("feed.default_index must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("Invalid configuration:\n  - {}", errors.join("\n  - "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://localhost:8080");
        assert_eq!(config.server.timeout_secs, 30);
        assert_eq!(config.server.connect_timeout_secs, 10);
        assert_eq!(config.feed.default_index, "idx1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, "http://localhost:8080");
        assert_eq!(config.feed.default_index, "idx1");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            base_url = "http://search.internal:9200"

            [feed]
            default_index = "articles"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "http://search.internal:9200");
        assert_eq!(config.server.timeout_secs, 30);
        assert_eq!(config.feed.default_index, "articles");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.base_url = "not a url".to_string();
        config.server.timeout_secs = 0;
        config.feed.default_index = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("base_url"));
        assert!(err.contains("timeout_secs"));
        assert!(err.contains("default_index"));
    }
}

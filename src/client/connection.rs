//! HTTP connection to the indexing server

use super::ClientError;
use crate::config::ServerConfig;
use crate::types::{CreateIndexRequest, CreateIndexResult, Envelope, IndicesResult, Record};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Raw outcome of one add_document call
#[derive(Debug, Clone)]
pub struct Exchange {
    /// HTTP status code returned by the server
    pub status: StatusCode,
    /// Raw response body text
    pub body: String,
}

/// Client for the indexing server's HTTP API
#[derive(Debug, Clone)]
pub struct IndexClient {
    /// Underlying HTTP client
    http: reqwest::Client,
    /// Server base URL, normalized to end with a slash
    base: Url,
}

impl IndexClient {
    /// Create a client from server settings.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let base = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, base })
    }

    /// Base URL the client talks to
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|_| ClientError::InvalidEndpoint(path.to_string()))
    }

    /// Submit one record to an index.
    ///
    /// Returns the raw status and body text. A non-success status is not an
    /// error here: the caller decides what to make of it.
    pub async fn add_document(&self, index: &str, record: &Record) -> Result<Exchange, ClientError> {
        let url = self.endpoint(&format!("{}/add_document", index))?;
        let response = self
            .http
            .post(url)
            .json(&Envelope { data: record })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(Exchange { status, body })
    }

    /// Create a new index on the server.
    pub async fn create_index(
        &self,
        name: &str,
        case_sensitivity: bool,
    ) -> Result<CreateIndexResult, ClientError> {
        let url = self.endpoint("create_index")?;
        let request = CreateIndexRequest {
            name: name.to_string(),
            case_sensitivity,
        };
        let response = self.http.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        Ok(response.json::<CreateIndexResult>().await?)
    }

    /// List the indices known to the server.
    pub async fn indices(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint("indices")?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        let result = response.json::<IndicesResult>().await?;
        Ok(result.indices)
    }
}

/// Parse the configured base URL, normalizing it to end with a slash so
/// endpoint joins preserve any path prefix.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&with_slash).map_err(|e| ClientError::InvalidBaseUrl(raw.to_string(), e))
}

/// Extract the server's error message from a reply body.
///
/// The server reports failures as `{"error": "..."}`; anything else is
/// returned verbatim.
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

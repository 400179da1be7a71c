//! HTTP client for the remote herb dataset.
//!
//! The dataset is a single static JSON document fetched without
//! authentication; the coordinator guarantees it is retrieved at most once
//! per profile.

use reqwest::Client;
use tracing::debug;

use crate::error::ImportError;
use crate::models::Herb;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Where the herb dataset can be fetched from.
///
/// One production implementation (`DatasetClient`) plus whatever doubles the
/// tests need.
pub trait DatasetSource {
    /// Retrieve the full dataset. All-or-nothing: a network error or a
    /// malformed payload fails the whole fetch with `FetchFailed`.
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<Herb>, ImportError>> + Send;
}

/// Dataset client backed by `reqwest`.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct DatasetClient {
    client: Client,
    url: String,
}

impl DatasetClient {
    /// Create a client for the dataset document at `url`.
    ///
    /// No timeout is applied; retry and timeout policy belong to the
    /// transport layer, not to this crate.
    pub fn new(url: impl Into<String>) -> Result<Self, ImportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ImportError::FetchFailed(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl DatasetSource for DatasetClient {
    async fn fetch(&self) -> Result<Vec<Herb>, ImportError> {
        debug!(url = %self.url, "fetching herb dataset");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ImportError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::FetchFailed(format!(
                "status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        let herbs: Vec<Herb> = response
            .json()
            .await
            .map_err(|e| ImportError::FetchFailed(e.to_string()))?;

        debug!(count = herbs.len(), "herb dataset fetched");
        Ok(herbs)
    }
}

/// Truncate a response body to avoid carrying excessive data in errors.
/// Counts characters, not bytes, so CJK bodies never split mid-codepoint.
fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... (truncated, {} total bytes)", truncated, body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short_passthrough() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn test_truncate_body_long_cjk() {
        let body = "中藥".repeat(600);
        let truncated = truncate_body(&body);
        assert!(truncated.starts_with("中藥"));
        assert!(truncated.contains("truncated"));
        assert!(truncated.chars().count() < body.chars().count());
    }
}

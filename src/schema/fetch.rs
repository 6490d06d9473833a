//! Schema retrieval over HTTP or from the local filesystem

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::SchemaFetcher;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetches `http(s)://` URLs with reqwest; anything else is read as a file path.
///
/// A leading `file://` is stripped before reading.
pub struct UrlSchemaFetcher {
    http: Client,
}

impl UrlSchemaFetcher {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http })
    }
}

fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[async_trait]
impl SchemaFetcher for UrlSchemaFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        if !is_remote(url) {
            let path = url.strip_prefix("file://").unwrap_or(url);
            return tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read schema file {}", path));
        }

        info!(url, "downloading XSD schema");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP {} while fetching {}", status, url));
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

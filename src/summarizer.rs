use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder used when the endpoint answers without a summary field.
const MISSING_SUMMARY: &str = "No summary returned";

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    service: &'a str,
    logs: &'a str,
}

/// Response from the summarization endpoint. Only the summary text is
/// required; anything else the endpoint sends along is kept verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    #[serde(default)]
    summary: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Summary {
    pub fn text(&self) -> &str {
        self.summary.as_deref().unwrap_or(MISSING_SUMMARY)
    }
}

/// Interface to the summarization endpoint, kept narrow so driver tests
/// can substitute a deterministic double.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, service: &str, logs: &str) -> anyhow::Result<Summary>;
}

/// HTTP client for the summarization endpoint. One POST per call, no
/// retries; the request timeout is fixed at construction.
pub struct HttpSummarizer {
    client: reqwest::Client,
    url: String,
}

impl HttpSummarizer {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, service: &str, logs: &str) -> anyhow::Result<Summary> {
        debug!(
            "Sending {} bytes of logs for {} to {}",
            logs.len(),
            service,
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .json(&SummarizeRequest { service, logs })
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.url))?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Summarization endpoint returned {}: {}",
                status,
                body.trim()
            );
        }

        response
            .json::<Summary>()
            .await
            .context("Summarization endpoint returned a malformed body")
    }
}

//! The NewsAPI client and its port implementation.

use std::time::Duration;

use async_trait::async_trait;

use micdrop_core::domain::NewsHeadline;
use micdrop_core::ports::{NewsError, NewsProvider};

use crate::wire::{HeadlinesResponse, to_headlines};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const TIMEOUT: Duration = Duration::from_secs(15);

/// Top-headlines client over NewsAPI.
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    /// Create a client. Without an API key every call fails immediately
    /// with [`NewsError::NotConfigured`].
    pub fn new(api_key: Option<String>) -> Result<Self, NewsError> {
        let http = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| NewsError::Provider(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Override the base URL (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn top_headlines(&self, count: usize) -> Result<Vec<NewsHeadline>, NewsError> {
        let api_key = self.api_key.as_deref().ok_or(NewsError::NotConfigured)?;
        let url = format!("{}/top-headlines", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("country", "us"),
                ("pageSize", &count.to_string()),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|e| NewsError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Provider(format!(
                "headlines request failed with {status}"
            )));
        }

        let payload: HeadlinesResponse = response
            .json()
            .await
            .map_err(|e| NewsError::Provider(format!("invalid headlines payload: {e}")))?;
        if payload.status != "ok" {
            return Err(NewsError::Provider(format!(
                "provider reported status '{}'",
                payload.status
            )));
        }
        Ok(to_headlines(payload, count))
    }
}

//! News provider port - headline fetching for topic suggestions.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::NewsHeadline;

/// Errors surfaced by the news provider.
#[derive(Debug, Error)]
pub enum NewsError {
    /// No API key configured.
    #[error("news provider is not configured")]
    NotConfigured,

    /// The provider call or response decoding failed.
    #[error("news provider error: {0}")]
    Provider(String),
}

/// Fetches current headlines from an external news API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `count` top headlines.
    async fn top_headlines(&self, count: usize) -> Result<Vec<NewsHeadline>, NewsError>;
}

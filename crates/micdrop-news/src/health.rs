//! Health check for the news collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use micdrop_core::domain::DiagnosticResult;
use micdrop_core::ports::HealthCheck;

use crate::client::NewsApiClient;

/// Reports whether the news provider has usable configuration.
pub struct NewsHealthCheck {
    client: Arc<NewsApiClient>,
}

impl NewsHealthCheck {
    /// Create a check over the shared client.
    pub fn new(client: Arc<NewsApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthCheck for NewsHealthCheck {
    fn name(&self) -> &'static str {
        "news-api"
    }

    async fn run(&self) -> DiagnosticResult {
        if self.client.is_configured() {
            DiagnosticResult::healthy(self.name(), "API key configured")
        } else {
            DiagnosticResult::unhealthy(self.name(), "API key not configured (fallback topics in use)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_unhealthy() {
        let client = Arc::new(NewsApiClient::new(None).unwrap());
        let result = NewsHealthCheck::new(client).run().await;
        assert!(!result.success);
        assert_eq!(result.check_name, "news-api");
    }

    #[tokio::test]
    async fn present_key_is_healthy() {
        let client = Arc::new(NewsApiClient::new(Some("key".into())).unwrap());
        let result = NewsHealthCheck::new(client).run().await;
        assert!(result.success);
    }
}

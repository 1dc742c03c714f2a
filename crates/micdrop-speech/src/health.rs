//! Health check for the speech collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use micdrop_core::domain::DiagnosticResult;
use micdrop_core::ports::HealthCheck;

use crate::client::SpeechClient;

/// Probes the speech provider by issuing an access token.
pub struct SpeechHealthCheck {
    client: Arc<SpeechClient>,
}

impl SpeechHealthCheck {
    /// Create a check over the shared client.
    pub fn new(client: Arc<SpeechClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthCheck for SpeechHealthCheck {
    fn name(&self) -> &'static str {
        "azure-speech"
    }

    async fn run(&self) -> DiagnosticResult {
        if !self.client.is_configured() {
            return DiagnosticResult::unhealthy(self.name(), "region or key not configured");
        }
        match self.client.access_token().await {
            Ok(_) => DiagnosticResult::healthy(self.name(), "token endpoint reachable"),
            Err(err) => DiagnosticResult::unhealthy(self.name(), err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeechClientConfig;

    #[tokio::test]
    async fn unconfigured_client_is_unhealthy() {
        let client = Arc::new(SpeechClient::new(SpeechClientConfig::new()).unwrap());
        let result = SpeechHealthCheck::new(client).run().await;
        assert!(!result.success);
        assert_eq!(result.check_name, "azure-speech");
    }
}

//! Health check for the AI collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use micdrop_core::domain::DiagnosticResult;
use micdrop_core::ports::HealthCheck;

use crate::client::AzureOpenAiClient;

/// Reports whether the AI provider has usable configuration.
pub struct AiHealthCheck {
    client: Arc<AzureOpenAiClient>,
}

impl AiHealthCheck {
    /// Create a check over the shared client.
    pub fn new(client: Arc<AzureOpenAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthCheck for AiHealthCheck {
    fn name(&self) -> &'static str {
        "azure-openai"
    }

    async fn run(&self) -> DiagnosticResult {
        if self.client.is_configured() {
            DiagnosticResult::healthy(self.name(), "endpoint and credentials configured")
        } else {
            DiagnosticResult::unhealthy(self.name(), "endpoint or API key not configured")
        }
    }
}

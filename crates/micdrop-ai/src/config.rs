//! Public configuration for the Azure OpenAI client.

use std::time::Duration;

use micdrop_core::Settings;

/// Configuration for the Azure OpenAI client.
///
/// Use the builder pattern methods to customize the client configuration.
#[derive(Debug, Clone)]
pub struct AiClientConfig {
    /// Azure OpenAI resource endpoint, without a trailing slash.
    pub(crate) endpoint: Option<String>,
    /// API key for the resource.
    pub(crate) api_key: Option<String>,
    /// Deployment (model) name.
    pub(crate) deployment: String,
    /// API version query parameter.
    pub(crate) api_version: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Attempts per generation call (first try included).
    pub(crate) max_retries: u32,
    /// Base delay between generation retries, scaled linearly per attempt.
    pub(crate) retry_base_delay: Duration,
}

impl Default for AiClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: micdrop_core::settings::DEFAULT_DEPLOYMENT.to_string(),
            api_version: "2024-06-01".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
            retry_base_delay: Duration::from_secs(1),
        }
    }
}

impl AiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a configuration from application settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            endpoint: settings
                .azure_openai_endpoint
                .as_ref()
                .map(|e| e.trim_end_matches('/').to_string()),
            api_key: settings.azure_openai_api_key.clone(),
            deployment: settings.effective_deployment().to_string(),
            ..Self::default()
        }
    }

    /// Set the resource endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        self.endpoint = Some(endpoint.trim_end_matches('/').to_string());
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the deployment name.
    #[must_use]
    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of generation attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay between generation retries.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = AiClientConfig::new();
        assert!(config.endpoint.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.deployment, "gpt-4o");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = AiClientConfig::new()
            .with_endpoint("https://example.openai.azure.com/")
            .with_api_key("secret")
            .with_deployment("gpt-4o-mini");
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://example.openai.azure.com")
        );
        assert_eq!(config.deployment, "gpt-4o-mini");
    }

    #[test]
    fn from_settings_picks_up_credentials() {
        let settings = Settings {
            azure_openai_endpoint: Some("https://example.openai.azure.com/".into()),
            azure_openai_api_key: Some("secret".into()),
            azure_openai_deployment: Some("custom".into()),
            ..Settings::default()
        };
        let config = AiClientConfig::from_settings(&settings);
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://example.openai.azure.com")
        );
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.deployment, "custom");
    }
}

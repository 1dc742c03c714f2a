//! Public configuration for the speech client.

use std::time::Duration;

use micdrop_core::Settings;

/// Configuration for the Azure Speech REST client.
#[derive(Debug, Clone)]
pub struct SpeechClientConfig {
    /// Azure region, e.g. `westeurope`.
    pub(crate) region: Option<String>,
    /// Subscription key for the speech resource.
    pub(crate) subscription_key: Option<String>,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// User agent sent with synthesis requests.
    pub(crate) user_agent: String,
}

impl Default for SpeechClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            subscription_key: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("micdrop/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SpeechClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a configuration from application settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            region: settings.azure_speech_region.clone(),
            subscription_key: settings.azure_speech_key.clone(),
            ..Self::default()
        }
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the subscription key.
    #[must_use]
    pub fn with_subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = SpeechClientConfig::new();
        assert!(config.region.is_none());
        assert!(config.subscription_key.is_none());
        assert!(config.user_agent.starts_with("micdrop/"));
    }

    #[test]
    fn from_settings_picks_up_credentials() {
        let settings = Settings {
            azure_speech_region: Some("westeurope".into()),
            azure_speech_key: Some("secret".into()),
            ..Settings::default()
        };
        let config = SpeechClientConfig::from_settings(&settings);
        assert_eq!(config.region.as_deref(), Some("westeurope"));
        assert_eq!(config.subscription_key.as_deref(), Some("secret"));
    }
}

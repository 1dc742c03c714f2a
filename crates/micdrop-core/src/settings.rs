//! Settings domain types and validation.
//!
//! Pure domain types with no infrastructure dependencies. The binary loads
//! values from the environment (with dotenv support) and hands a populated
//! [`Settings`] to the composition root.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default port for the HTTP server.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default model deployment name for the AI provider.
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";

/// Default on-disk location of the win/loss store.
pub const DEFAULT_DATABASE_PATH: &str = "micdrop.db";

/// Default location of the lyrics collection.
pub const DEFAULT_LYRICS_PATH: &str = "data/lyrics-collection.json";

/// Application settings.
///
/// All fields are optional: unset provider credentials leave the matching
/// feature unconfigured rather than failing startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Azure OpenAI endpoint, e.g. `https://myresource.openai.azure.com`.
    pub azure_openai_endpoint: Option<String>,
    /// Azure OpenAI API key.
    pub azure_openai_api_key: Option<String>,
    /// Azure OpenAI deployment name.
    pub azure_openai_deployment: Option<String>,
    /// Azure Speech region, e.g. `westeurope`.
    pub azure_speech_region: Option<String>,
    /// Azure Speech subscription key.
    pub azure_speech_key: Option<String>,
    /// NewsAPI key for topic suggestions.
    pub news_api_key: Option<String>,
    /// Path to the lyrics collection JSON file.
    pub lyrics_path: Option<String>,
    /// Path to the sqlite database file (`:memory:` for an in-memory store).
    pub database_path: Option<String>,
    /// HTTP server port.
    pub http_port: Option<u16>,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary variable source (used by tests).
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        Self {
            azure_openai_endpoint: get("AZURE_OPENAI_ENDPOINT"),
            azure_openai_api_key: get("AZURE_OPENAI_API_KEY"),
            azure_openai_deployment: get("AZURE_OPENAI_DEPLOYMENT"),
            azure_speech_region: get("AZURE_SPEECH_REGION"),
            azure_speech_key: get("AZURE_SPEECH_KEY"),
            news_api_key: get("NEWS_API_KEY"),
            lyrics_path: get("MICDROP_LYRICS_PATH"),
            database_path: get("MICDROP_DB_PATH"),
            http_port: get("MICDROP_PORT").and_then(|v| v.parse().ok()),
        }
    }

    /// Effective HTTP port (with default fallback).
    #[must_use]
    pub fn effective_http_port(&self) -> u16 {
        self.http_port.unwrap_or(DEFAULT_HTTP_PORT)
    }

    /// Effective AI deployment name (with default fallback).
    #[must_use]
    pub fn effective_deployment(&self) -> &str {
        self.azure_openai_deployment
            .as_deref()
            .unwrap_or(DEFAULT_DEPLOYMENT)
    }

    /// Effective database path (with default fallback).
    #[must_use]
    pub fn effective_database_path(&self) -> &str {
        self.database_path.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Effective lyrics path (with default fallback).
    #[must_use]
    pub fn effective_lyrics_path(&self) -> &str {
        self.lyrics_path.as_deref().unwrap_or(DEFAULT_LYRICS_PATH)
    }

    /// Whether the AI provider has endpoint and key configured.
    #[must_use]
    pub fn openai_configured(&self) -> bool {
        self.azure_openai_endpoint.is_some() && self.azure_openai_api_key.is_some()
    }

    /// Whether the speech provider has region and key configured.
    #[must_use]
    pub fn speech_configured(&self) -> bool {
        self.azure_speech_region.is_some() && self.azure_speech_key.is_some()
    }
}

/// Settings validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The AI endpoint is present but not an absolute http(s) URL.
    #[error("invalid AI endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP port is zero.
    #[error("http port must be non-zero")]
    InvalidPort,
}

/// Validate settings before composition. Unset optional providers are fine;
/// present-but-malformed values are not.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(endpoint) = &settings.azure_openai_endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(SettingsError::InvalidEndpoint(endpoint.clone()));
        }
    }
    if settings.http_port == Some(0) {
        return Err(SettingsError::InvalidPort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn from_vars_reads_known_keys() {
        let env = vars(&[
            ("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com"),
            ("AZURE_OPENAI_API_KEY", "key"),
            ("MICDROP_PORT", "9999"),
        ]);
        let settings = Settings::from_vars(|k| env.get(k).cloned());

        assert!(settings.openai_configured());
        assert!(!settings.speech_configured());
        assert_eq!(settings.effective_http_port(), 9999);
        assert_eq!(settings.effective_deployment(), DEFAULT_DEPLOYMENT);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = vars(&[("AZURE_OPENAI_ENDPOINT", "   ")]);
        let settings = Settings::from_vars(|k| env.get(k).cloned());
        assert!(settings.azure_openai_endpoint.is_none());
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::default();
        assert_eq!(settings.effective_http_port(), DEFAULT_HTTP_PORT);
        assert_eq!(settings.effective_database_path(), DEFAULT_DATABASE_PATH);
        assert_eq!(settings.effective_lyrics_path(), DEFAULT_LYRICS_PATH);
    }

    #[test]
    fn malformed_endpoint_fails_validation() {
        let settings = Settings {
            azure_openai_endpoint: Some("example.openai.azure.com".into()),
            ..Settings::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::InvalidEndpoint(
                "example.openai.azure.com".into()
            ))
        );
    }

    #[test]
    fn zero_port_fails_validation() {
        let settings = Settings {
            http_port: Some(0),
            ..Settings::default()
        };
        assert_eq!(validate_settings(&settings), Err(SettingsError::InvalidPort));
    }
}

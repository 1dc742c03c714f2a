//! The speech REST client and its port implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use micdrop_core::ports::{SpeechError, SpeechSynthesizer};

use crate::config::SpeechClientConfig;
use crate::ssml::build_ssml;

/// Issued tokens live ~10 minutes; refresh after 9 with a 1 minute margin.
const TOKEN_TTL: Duration = Duration::from_secs(9 * 60);
const TOKEN_EARLY_REFRESH: Duration = Duration::from_secs(60);

const OUTPUT_FORMAT: &str = "audio-16khz-32kbitrate-mono-mp3";
const SSML_LANG: &str = "en-US";

struct CachedToken {
    value: String,
    fetched_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() + TOKEN_EARLY_REFRESH < TOKEN_TTL
    }
}

/// Text-to-speech over the Azure Speech REST API.
pub struct SpeechClient {
    http: reqwest::Client,
    config: SpeechClientConfig,
    token: Mutex<Option<CachedToken>>,
}

impl SpeechClient {
    /// Create a client. An unconfigured client is still constructable - its
    /// calls fail immediately with [`SpeechError::NotConfigured`].
    pub fn new(config: SpeechClientConfig) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpeechError::Provider(format!("failed to build HTTP client: {e}")))?;
        if config.region.is_none() || config.subscription_key.is_none() {
            tracing::warn!("Azure Speech not configured, TTS will be unavailable");
        } else {
            tracing::info!(region = config.region.as_deref(), "Azure Speech client initialized");
        }
        Ok(Self {
            http,
            config,
            token: Mutex::new(None),
        })
    }

    /// Whether region and key are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.region.is_some() && self.config.subscription_key.is_some()
    }

    fn credentials(&self) -> Result<(&str, &str), SpeechError> {
        match (&self.config.region, &self.config.subscription_key) {
            (Some(region), Some(key)) => Ok((region, key)),
            _ => Err(SpeechError::NotConfigured),
        }
    }

    /// Fetch or reuse the cached bearer token.
    ///
    /// Also used by the health check as a cheap end-to-end probe of the
    /// provider.
    pub async fn access_token(&self) -> Result<String, SpeechError> {
        let (region, key) = self.credentials()?;

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh() {
                return Ok(token.value.clone());
            }
        }

        let endpoint = format!("https://{region}.api.cognitive.microsoft.com/sts/v1.0/issueToken");
        let response = self
            .http
            .post(&endpoint)
            .header("Ocp-Apim-Subscription-Key", key)
            .header(reqwest::header::CONTENT_LENGTH, 0)
            .send()
            .await
            .map_err(|e| SpeechError::Provider(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Provider(format!(
                "token request failed with {status}"
            )));
        }

        let value = response
            .text()
            .await
            .map_err(|e| SpeechError::Provider(format!("token body unreadable: {e}")))?;
        *cached = Some(CachedToken {
            value: value.clone(),
            fetched_at: Instant::now(),
        });
        tracing::debug!("refreshed speech access token");
        Ok(value)
    }
}

#[async_trait]
impl SpeechSynthesizer for SpeechClient {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError> {
        let (region, _) = self.credentials()?;
        let token = self.access_token().await?;

        tracing::debug!(voice, "generating speech");
        let endpoint = format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1");
        let ssml = build_ssml(text, voice, SSML_LANG);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .body(ssml)
            .send()
            .await
            .map_err(|e| SpeechError::Provider(format!("synthesis request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Provider(format!(
                "speech synthesis failed ({status}): {body}"
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Provider(format!("audio body unreadable: {e}")))?;
        if audio.is_empty() {
            return Err(SpeechError::Provider(
                "no audio data was generated".to_string(),
            ));
        }
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_synthesis_fails_fast() {
        let client = SpeechClient::new(SpeechClientConfig::new()).unwrap();
        assert!(!client.is_configured());
        let err = client
            .synthesize("hello", "en-US-GuyNeural")
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::NotConfigured));
    }

    #[tokio::test]
    async fn unconfigured_token_fetch_fails_fast() {
        let client = SpeechClient::new(SpeechClientConfig::new()).unwrap();
        let err = client.access_token().await.unwrap_err();
        assert!(matches!(err, SpeechError::NotConfigured));
    }

    #[test]
    fn fresh_token_is_reused() {
        let token = CachedToken {
            value: "abc".into(),
            fetched_at: Instant::now(),
        };
        assert!(token.is_fresh());
    }

    #[test]
    fn old_token_is_refreshed() {
        // Skip on hosts whose monotonic clock is younger than the TTL.
        let Some(past) = Instant::now().checked_sub(TOKEN_TTL) else {
            return;
        };
        let token = CachedToken {
            value: "abc".into(),
            fetched_at: past,
        };
        assert!(!token.is_fresh());
    }
}

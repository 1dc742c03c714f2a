//! Speech synthesis port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the speech synthesizer.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The speech service has no region or key configured.
    #[error("speech service is not configured")]
    NotConfigured,

    /// The provider call failed.
    #[error("speech provider error: {0}")]
    Provider(String),
}

/// Text-to-speech over an external provider.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the given provider voice, returning encoded
    /// audio bytes.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError>;
}

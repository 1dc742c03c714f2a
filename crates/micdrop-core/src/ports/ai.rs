//! AI port - turn text generation and debate judging.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::JudgeVerdict;

/// Errors surfaced by the AI collaborator.
///
/// `NotConfigured` is surfaced immediately and never retried; `Provider`
/// failures are expected to have already exhausted the implementation's own
/// bounded retry policy.
#[derive(Debug, Error)]
pub enum AiError {
    /// The AI service has no endpoint or credentials configured.
    #[error("AI service is not configured")]
    NotConfigured,

    /// The provider call failed after retries.
    #[error("AI provider error: {0}")]
    Provider(String),

    /// The model returned no usable content.
    #[error("AI returned an empty completion")]
    EmptyCompletion,
}

/// Text generation and judging over an LLM.
///
/// Implementations apply their own bounded retry policy before surfacing
/// failure. Judge output that cannot be parsed must yield the sentinel
/// verdict (see [`JudgeVerdict::parse_error`]) rather than an error -
/// only transport failures propagate.
#[async_trait]
pub trait DebateAi: Send + Sync {
    /// Generate one turn's verse from a transcript-conditioned prompt.
    async fn generate_turn_text(&self, prompt: &str, max_tokens: u32) -> Result<String, AiError>;

    /// Judge a finished transcript and declare a winner.
    async fn judge_debate(
        &self,
        transcript: &str,
        rapper1: &str,
        rapper2: &str,
        topic: &str,
    ) -> Result<JudgeVerdict, AiError>;
}

//! The Azure OpenAI chat client and its port implementations.

use async_trait::async_trait;

use micdrop_core::domain::JudgeVerdict;
use micdrop_core::ports::{AiError, DebateAi, Translator};

use crate::config::AiClientConfig;
use crate::wire::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
    parse_judge_verdict,
};

const TURN_SYSTEM_PROMPT: &str = "You are a rap battle AI. Generate creative, clean, and \
     impactful rap lyrics. Keep responses concise.";

const TRANSLATION_SYSTEM_PROMPT: &str = "Translate modern English to Victorian-era style. Use \
     period vocabulary and formal prose. Output only the translated text, no explanations.";

const TRANSLATION_MAX_TOKENS: u32 = 500;

/// Chat client over an Azure OpenAI deployment.
///
/// One client is shared process-wide; per-turn scoping hands out cheap
/// handles to it.
pub struct AzureOpenAiClient {
    http: reqwest::Client,
    config: AiClientConfig,
}

impl AzureOpenAiClient {
    /// Create a client. An unconfigured client is still constructable - its
    /// calls fail immediately with [`AiError::NotConfigured`].
    pub fn new(config: AiClientConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Provider(format!("failed to build HTTP client: {e}")))?;
        if config.endpoint.is_none() || config.api_key.is_none() {
            tracing::warn!("Azure OpenAI endpoint or API key not configured, AI features will be unavailable");
        } else {
            tracing::info!(deployment = %config.deployment, "Azure OpenAI client initialized");
        }
        Ok(Self { http, config })
    }

    /// Whether endpoint and credentials are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.endpoint.is_some() && self.config.api_key.is_some()
    }

    fn chat_url(&self) -> Result<String, AiError> {
        let endpoint = self.config.endpoint.as_deref().ok_or(AiError::NotConfigured)?;
        Ok(format!(
            "{endpoint}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.deployment, self.config.api_version
        ))
    }

    /// One chat completion round-trip. Empty model output is an error so
    /// callers can retry it like any other transient failure.
    async fn chat(
        &self,
        system: &str,
        user: &str,
        max_tokens: Option<u32>,
        temperature: f32,
        json_mode: bool,
    ) -> Result<String, AiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AiError::NotConfigured)?;
        let url = self.chat_url()?;

        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
            response_format: json_mode.then_some(ResponseFormat::JSON_OBJECT),
        };

        let response = self
            .http
            .post(&url)
            .header("api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Provider(format!("{status}: {body}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AiError::Provider(format!("invalid completion payload: {e}")))?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AiError::EmptyCompletion)
    }
}

#[async_trait]
impl DebateAi for AzureOpenAiClient {
    async fn generate_turn_text(&self, prompt: &str, max_tokens: u32) -> Result<String, AiError> {
        if !self.is_configured() {
            return Err(AiError::NotConfigured);
        }
        tracing::debug!(max_tokens, "generating debate turn");

        let mut last_error = None;
        for attempt in 1..=self.config.max_retries {
            if attempt > 1 {
                tokio::time::sleep(self.config.retry_base_delay * (attempt - 1)).await;
            }
            match self
                .chat(TURN_SYSTEM_PROMPT, prompt, Some(max_tokens), 0.7, false)
                .await
            {
                Ok(text) => {
                    tracing::debug!(attempt, "generated debate turn");
                    return Ok(text);
                }
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        %err,
                        "error generating debate turn"
                    );
                    last_error = Some(err);
                }
            }
        }
        Err(last_error
            .unwrap_or_else(|| AiError::Provider("no attempts were made".to_string())))
    }

    async fn judge_debate(
        &self,
        transcript: &str,
        rapper1: &str,
        rapper2: &str,
        topic: &str,
    ) -> Result<JudgeVerdict, AiError> {
        if !self.is_configured() {
            return Err(AiError::NotConfigured);
        }
        tracing::debug!(topic, "judging debate");

        let system = format!(
            "You are an impartial rap battle judge. Analyze the debate transcript between \
             {rapper1} and {rapper2} on '{topic}'. Determine a winner based on lyrical skill, \
             relevance, creativity, and impact. Respond in JSON: \
             {{\"winnerName\":\"...\",\"reasoning\":\"...\",\"stats\":{{\
             \"rapper1LogicScore\":0,\"rapper1SentimentScore\":0,\"rapper1AdherenceScore\":0,\
             \"rapper1RebuttalScore\":0,\"rapper2LogicScore\":0,\"rapper2SentimentScore\":0,\
             \"rapper2AdherenceScore\":0,\"rapper2RebuttalScore\":0,\
             \"rapper1TotalScore\":0,\"rapper2TotalScore\":0}}}}"
        );
        let user = format!("Debate Transcript:\n{transcript}");

        let json = self.chat(&system, &user, None, 0.5, true).await?;
        Ok(parse_judge_verdict(&json))
    }
}

#[async_trait]
impl Translator for AzureOpenAiClient {
    async fn translate_to_victorian(&self, text: &str) -> Result<String, AiError> {
        if !self.is_configured() {
            return Err(AiError::NotConfigured);
        }
        tracing::debug!(length = text.len(), "translating to Victorian English");
        self.chat(
            TRANSLATION_SYSTEM_PROMPT,
            text,
            Some(TRANSLATION_MAX_TOKENS),
            0.7,
            false,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_client() -> AzureOpenAiClient {
        AzureOpenAiClient::new(
            AiClientConfig::new()
                .with_endpoint("https://example.openai.azure.com/")
                .with_api_key("secret")
                .with_deployment("gpt-4o"),
        )
        .unwrap()
    }

    #[test]
    fn chat_url_targets_the_deployment() {
        let client = configured_client();
        assert_eq!(
            client.chat_url().unwrap(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01"
        );
    }

    #[test]
    fn unconfigured_client_reports_itself() {
        let client = AzureOpenAiClient::new(AiClientConfig::new()).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(client.chat_url(), Err(AiError::NotConfigured)));
    }

    #[tokio::test]
    async fn unconfigured_generation_fails_fast() {
        let client = AzureOpenAiClient::new(AiClientConfig::new()).unwrap();
        let err = client.generate_turn_text("prompt", 150).await.unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));
    }

    #[tokio::test]
    async fn unconfigured_judge_fails_fast() {
        let client = AzureOpenAiClient::new(AiClientConfig::new()).unwrap();
        let err = client
            .judge_debate("transcript", "Alpha", "Beta", "Topic")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));
    }

    #[tokio::test]
    async fn unconfigured_translation_fails_fast() {
        let client = AzureOpenAiClient::new(AiClientConfig::new()).unwrap();
        let err = client.translate_to_victorian("hello").await.unwrap_err();
        assert!(matches!(err, AiError::NotConfigured));
    }
}

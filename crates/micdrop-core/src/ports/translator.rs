//! Translator port - modern English to Victorian-era English.

use async_trait::async_trait;

use crate::ports::AiError;

/// Stylized-English translation over the LLM.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate modern English into Victorian-era prose.
    async fn translate_to_victorian(&self, text: &str) -> Result<String, AiError>;
}

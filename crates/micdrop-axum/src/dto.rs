//! Request and response shapes for the HTTP API.
//!
//! Wire DTOs are camelCase. The full debate snapshot (including audio) only
//! travels over SSE; the polling endpoint returns this trimmed state view.

use serde::{Deserialize, Serialize};

use micdrop_core::domain::DebateState;

/// `POST /api/debate/start` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDebateRequest {
    pub rapper1_name: String,
    pub rapper2_name: String,
    pub topic_title: String,
    #[serde(default)]
    pub topic_category: Option<String>,
    #[serde(default)]
    pub topic_description: Option<String>,
}

/// Trimmed debate state for the polling endpoint (no audio payload).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateStateResponse {
    pub current_turn: u32,
    pub is_debate_in_progress: bool,
    pub is_debate_finished: bool,
    pub is_generating_turn: bool,
    pub rapper1: String,
    pub rapper2: String,
    pub topic: String,
    pub winner_name: String,
    pub judge_reasoning: String,
    pub error_message: String,
}

impl From<&DebateState> for DebateStateResponse {
    fn from(state: &DebateState) -> Self {
        Self {
            current_turn: state.current_turn,
            is_debate_in_progress: state.is_in_progress,
            is_debate_finished: state.is_finished,
            is_generating_turn: state.is_generating_turn,
            rapper1: state.rapper1.name.clone(),
            rapper2: state.rapper2.name.clone(),
            topic: state.topic.title.clone(),
            winner_name: state.winner_name.clone(),
            judge_reasoning: state.judge_reasoning.clone(),
            error_message: state.error_message.clone(),
        }
    }
}

/// Simple acknowledgement body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `POST /api/translation` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
}

/// `POST /api/translation` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
}

/// `POST /api/speech/synthesize` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default)]
    pub voice_name: Option<String>,
}

/// One song title + lyrics payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResponse {
    pub title: String,
    pub lyrics: String,
}

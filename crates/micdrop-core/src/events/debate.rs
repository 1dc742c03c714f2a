//! Serializable snapshot of the debate state, pushed after every mutation.
//!
//! Observers must tolerate duplicate or slightly stale snapshots; the turn
//! index identifies which turn a snapshot belongs to. Audio is re-encoded as
//! base64 for transport.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::domain::{DebateState, DebateStats};

/// Wire-shape snapshot of a [`DebateState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateSnapshot {
    pub current_turn: u32,
    pub is_debate_in_progress: bool,
    pub is_debate_finished: bool,
    pub is_generating_turn: bool,
    pub is_rapper1_turn: bool,
    pub current_turn_text: String,
    pub winner_name: String,
    pub judge_reasoning: String,
    pub error_message: String,
    pub rapper1_name: String,
    pub rapper2_name: String,
    pub topic_title: String,
    pub has_audio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
    pub stats: DebateStats,
}

impl DebateSnapshot {
    /// Capture the current state as a transport-ready snapshot.
    #[must_use]
    pub fn of(state: &DebateState) -> Self {
        let has_audio = !state.current_turn_audio.is_empty();
        Self {
            current_turn: state.current_turn,
            is_debate_in_progress: state.is_in_progress,
            is_debate_finished: state.is_finished,
            is_generating_turn: state.is_generating_turn,
            is_rapper1_turn: state.is_rapper1_turn,
            current_turn_text: state.current_turn_text.clone(),
            winner_name: state.winner_name.clone(),
            judge_reasoning: state.judge_reasoning.clone(),
            error_message: state.error_message.clone(),
            rapper1_name: state.rapper1.name.clone(),
            rapper2_name: state.rapper2.name.clone(),
            topic_title: state.topic.title.clone(),
            has_audio,
            audio_base64: has_audio.then(|| BASE64.encode(&state.current_turn_audio)),
            stats: state.stats.clone(),
        }
    }
}

//! Debate session state - the single live record of an in-progress or
//! just-finished battle.
//!
//! Exactly one `DebateState` is live at a time. It is owned by the
//! orchestrator, replaced wholesale on reset/start, and mutated in place
//! during a run. External callers only ever see cloned snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::rapper::Rapper;
use crate::domain::topic::Topic;

/// Winner sentinel recorded when the judge call itself failed.
pub const JUDGE_ERROR_WINNER: &str = "Error Judging";

/// Winner sentinel recorded when the judge's output could not be parsed.
pub const JUDGE_PARSE_ERROR_WINNER: &str = "Error Parsing";

/// Text substituted for a turn whose generation failed.
pub const TURN_SKIPPED_PLACEHOLDER: &str = "[Turn skipped due to error]";

/// One generated utterance by one contestant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    pub speaker: String,
    pub turn: u32,
    pub text: String,
}

/// Numerical statistics for a completed debate, as scored by the AI judge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebateStats {
    pub rapper1_logic_score: i32,
    pub rapper1_sentiment_score: i32,
    pub rapper1_adherence_score: i32,
    pub rapper1_rebuttal_score: i32,
    pub rapper2_logic_score: i32,
    pub rapper2_sentiment_score: i32,
    pub rapper2_adherence_score: i32,
    pub rapper2_rebuttal_score: i32,
    pub rapper1_total_score: i32,
    pub rapper2_total_score: i32,
}

/// The judge's ruling over a finished transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeVerdict {
    pub winner_name: String,
    pub reasoning: String,
    pub stats: DebateStats,
}

impl JudgeVerdict {
    /// Sentinel verdict for unparseable judge output.
    #[must_use]
    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self {
            winner_name: JUDGE_PARSE_ERROR_WINNER.to_string(),
            reasoning: detail.into(),
            stats: DebateStats::default(),
        }
    }
}

/// The session state of the current debate.
///
/// `is_in_progress` and `is_finished` are mutually exclusive except both
/// false before start and after a full reset; finished implies not
/// in-progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebateState {
    pub rapper1: Rapper,
    pub rapper2: Rapper,
    pub topic: Topic,
    pub is_in_progress: bool,
    pub is_finished: bool,
    /// Starts at 0, increments once per turn, bounded by the configured
    /// maximum (which must be even so turns alternate evenly).
    pub current_turn: u32,
    /// True means the next turn belongs to rapper 1.
    pub is_rapper1_turn: bool,
    /// Append-only log of turn records, cleared on reset.
    pub transcript: Vec<TurnRecord>,
    /// Latest generated text; holds the introduction line before the loop
    /// starts.
    pub current_turn_text: String,
    /// Latest synthesized audio. Empty means "no audio this turn", which is
    /// not an error by itself.
    pub current_turn_audio: Vec<u8>,
    pub winner_name: String,
    pub judge_reasoning: String,
    pub stats: DebateStats,
    /// Last non-fatal error surfaced to observers; cleared at each turn
    /// start.
    pub error_message: String,
    /// True while any per-turn async work (text, audio, judging) is
    /// outstanding.
    pub is_generating_turn: bool,
}

impl DebateState {
    /// State before any debate has started, and after a full reset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed state for a freshly started debate: turn 0, rapper 1 up first,
    /// and an introduction line ready for synthesis.
    #[must_use]
    pub fn for_new_debate(rapper1: Rapper, rapper2: Rapper, topic: Topic, max_turns: u32) -> Self {
        let total_rounds = max_turns / 2;
        let intro = format!(
            "Let the battle begin! {} vs {} on '{}'. {} rounds. Let's go!",
            rapper1.name, rapper2.name, topic.title, total_rounds
        );
        Self {
            rapper1,
            rapper2,
            topic,
            is_in_progress: true,
            current_turn: 0,
            is_rapper1_turn: true,
            current_turn_text: intro,
            ..Self::default()
        }
    }

    /// Render the transcript the way the judge and the per-turn prompts see
    /// it.
    #[must_use]
    pub fn render_transcript(&self) -> String {
        let mut out = String::new();
        for record in &self.transcript {
            out.push_str(&format!(
                "{} (Turn {}):\n{}\n\n",
                record.speaker, record.turn, record.text
            ));
        }
        out
    }
}

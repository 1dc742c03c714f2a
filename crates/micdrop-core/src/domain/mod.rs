//! Domain types shared across the application.
//!
//! Pure data types with no infrastructure dependencies. Wire-facing types
//! serialize as camelCase to match the web client.

pub mod debate;
pub mod diagnostics;
pub mod lyrics;
pub mod news;
pub mod rapper;
pub mod topic;

pub use debate::{
    DebateState, DebateStats, JUDGE_ERROR_WINNER, JUDGE_PARSE_ERROR_WINNER, JudgeVerdict,
    TURN_SKIPPED_PLACEHOLDER, TurnRecord,
};
pub use diagnostics::DiagnosticResult;
pub use lyrics::{LyricsCollection, SongEntry};
pub use news::NewsHeadline;
pub use rapper::{DEFAULT_ROSTER, Rapper};
pub use topic::{Topic, default_topics};

//! Core services - the application's business logic layer.
//!
//! The debate orchestrator lives here, together with the thin services
//! wrapping the external collaborators (translation, lyrics, topics,
//! diagnostics). Services depend on ports, never on concrete adapters.

mod diagnostics;
mod lyrics;
mod orchestrator;
mod playback;
mod topics;
mod translation;

pub use diagnostics::DiagnosticsService;
pub use lyrics::LyricsService;
pub use orchestrator::{DebateOrchestrator, DebateTuning};
pub use playback::{PlaybackGate, WaitOutcome};
pub use topics::TopicsService;
pub use translation::{TranslationCache, TranslationService};

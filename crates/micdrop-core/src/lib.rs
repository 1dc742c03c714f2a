//! Core domain types, port definitions, and services for micdrop.
//!
//! This crate is the hexagonal center of the application: domain types and
//! the debate orchestrator live here, together with the port traits that
//! adapters (web server, sqlite store, HTTP clients) implement. It contains
//! no transport, database, or provider-specific code.

pub mod domain;
pub mod events;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    DebateState, DebateStats, DiagnosticResult, JUDGE_ERROR_WINNER, JUDGE_PARSE_ERROR_WINNER,
    JudgeVerdict, LyricsCollection, NewsHeadline, Rapper, SongEntry, TURN_SKIPPED_PLACEHOLDER,
    Topic, TurnRecord, default_topics,
};
pub use events::DebateSnapshot;
pub use ports::{
    AiError, CoreError, DebateAi, DebateEventEmitter, DebateServiceFactory, DebateServices,
    HealthCheck, NewsError, NewsProvider, NoopEmitter, RapperRepository, RepositoryError,
    SharedServiceFactory, SpeechError, SpeechSynthesizer, Translator,
};
pub use services::{
    DebateOrchestrator, DebateTuning, DiagnosticsService, LyricsService, PlaybackGate,
    TopicsService, TranslationCache, TranslationService, WaitOutcome,
};
pub use settings::{DEFAULT_HTTP_PORT, Settings, SettingsError, validate_settings};

//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx`, `reqwest`, or transport types in any signature
//! - Traits are minimal and intent-based
//! - Each external collaborator gets its own error enum

pub mod ai;
pub mod emitter;
pub mod health;
pub mod news;
pub mod rappers;
pub mod scope;
pub mod speech;
pub mod translator;

use thiserror::Error;

pub use ai::{AiError, DebateAi};
pub use emitter::{DebateEventEmitter, NoopEmitter};
pub use health::HealthCheck;
pub use news::{NewsError, NewsProvider};
pub use rappers::RapperRepository;
pub use scope::{DebateServiceFactory, DebateServices, SharedServiceFactory};
pub use speech::{SpeechError, SpeechSynthesizer};
pub use translator::Translator;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and provides a clean interface for services to handle storage
/// failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain. Adapters
/// map this to their own error types (HTTP status codes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// AI collaborator failed.
    #[error(transparent)]
    Ai(#[from] AiError),

    /// Speech synthesis failed.
    #[error(transparent)]
    Speech(#[from] SpeechError),

    /// News provider failed.
    #[error(transparent)]
    News(#[from] NewsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

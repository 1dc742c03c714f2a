//! Event emitter trait for broadcasting debate state snapshots.
//!
//! This module defines the abstraction for pushing state updates to
//! observers. Implementations handle transport details (SSE, channels,
//! etc.). Delivery is fire-and-forget: failures are logged by the
//! implementation and never propagate to the orchestrator.

use crate::events::DebateSnapshot;

/// Trait for emitting debate state snapshots.
///
/// This abstraction keeps broadcast plumbing out of the orchestrator and
/// prevents channel types from becoming part of the public API surface.
///
/// # Implementations
///
/// - [`NoopEmitter`] - for tests and CLI contexts that don't need events
/// - Adapter-specific implementations (Axum SSE, etc.)
pub trait DebateEventEmitter: Send + Sync {
    /// Emit a state snapshot to all observers.
    ///
    /// Implementations should not block and must swallow delivery failures.
    fn emit(&self, snapshot: DebateSnapshot);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn DebateEventEmitter>;
}

/// A no-op emitter for tests and CLI contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DebateEventEmitter for NoopEmitter {
    fn emit(&self, _snapshot: DebateSnapshot) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn DebateEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DebateState;
    use std::sync::Arc;

    #[test]
    fn noop_emitter_accepts_snapshots() {
        let emitter = NoopEmitter::new();
        emitter.emit(DebateSnapshot::of(&DebateState::empty()));
    }

    #[test]
    fn noop_emitter_clone_box() {
        let emitter: Arc<dyn DebateEventEmitter> = Arc::new(NoopEmitter::new());
        let boxed = emitter.clone_box();
        boxed.emit(DebateSnapshot::of(&DebateState::empty()));
    }
}

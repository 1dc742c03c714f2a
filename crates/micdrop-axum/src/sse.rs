//! SSE broadcaster for real-time debate state streaming.
//!
//! Implements the core event emitter port over a `tokio::sync::broadcast`
//! channel, streaming serialized snapshots to every connected web client.
//! Delivery is at-least-once and unordered-safe: slow clients may lag and
//! drop snapshots, which observers tolerate by keying on the turn index.

use std::convert::Infallible;
use std::sync::Arc;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::Stream;
use tokio::sync::broadcast;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;

use micdrop_core::events::DebateSnapshot;
use micdrop_core::ports::DebateEventEmitter;

/// Broadcasts debate snapshots to zero or more SSE subscribers.
#[derive(Debug, Clone)]
pub struct SseBroadcaster {
    sender: broadcast::Sender<DebateSnapshot>,
}

impl SseBroadcaster {
    /// Create a broadcaster with the specified channel capacity.
    ///
    /// Slow clients may miss snapshots if the buffer overflows.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create a broadcaster with default capacity (256 snapshots).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(256)
    }

    /// Create an SSE stream for a new client connection.
    ///
    /// Includes a keep-alive ping every 30 seconds to prevent proxy
    /// timeouts.
    pub fn subscribe(
        self: Arc<Self>,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
        let receiver = self.sender.subscribe();
        let stream = BroadcastStream::new(receiver).filter_map(|result| match result {
            Ok(snapshot) => match serde_json::to_string(&snapshot) {
                Ok(json) => Some(Ok(Event::default().event("debate-state").data(json))),
                Err(e) => {
                    tracing::warn!("failed to serialize snapshot: {}", e);
                    None
                }
            },
            Err(e) => {
                // Lagged or closed; the client just misses some snapshots.
                tracing::debug!("SSE stream error: {}", e);
                None
            }
        });

        Sse::new(stream).keep_alive(
            KeepAlive::new()
                .interval(std::time::Duration::from_secs(30))
                .text("ping"),
        )
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl DebateEventEmitter for SseBroadcaster {
    fn emit(&self, snapshot: DebateSnapshot) {
        // No subscribers is fine; send errors are ignored.
        let _ = self.sender.send(snapshot);
    }

    fn clone_box(&self) -> Box<dyn DebateEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micdrop_core::domain::DebateState;

    #[test]
    fn broadcaster_starts_without_subscribers() {
        let broadcaster = SseBroadcaster::with_defaults();
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[test]
    fn emit_without_subscribers_does_not_panic() {
        let broadcaster = SseBroadcaster::with_defaults();
        broadcaster.emit(DebateSnapshot::of(&DebateState::empty()));
    }

    #[tokio::test]
    async fn subscriber_receives_snapshots() {
        let broadcaster = SseBroadcaster::with_defaults();
        let mut receiver = broadcaster.sender.subscribe();

        let mut state = DebateState::empty();
        state.current_turn = 3;
        broadcaster.emit(DebateSnapshot::of(&state));

        let snapshot = receiver.recv().await.unwrap();
        assert_eq!(snapshot.current_turn, 3);
    }
}

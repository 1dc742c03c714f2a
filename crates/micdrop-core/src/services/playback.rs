//! Single-slot playback acknowledgement gate.
//!
//! The turn loop waits on this gate (bounded by a timeout) after
//! broadcasting a turn with audio, so playback on the client paces the
//! debate. A remote client resolves the gate via
//! `signal_audio_playback_complete`.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::oneshot;

/// Outcome of one bounded wait on the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The acknowledgement arrived in time (or had already arrived).
    Completed,
    /// The timeout elapsed without an acknowledgement.
    TimedOut,
}

/// A single-resolution completion signal, re-armed once per turn.
///
/// The gate holds one oneshot pair at a time. `complete` consumes the
/// sender; a signal that arrives before `wait` starts is buffered by the
/// channel and satisfies the wait immediately. `arm` discards any stale
/// pair and installs a fresh one, so a signal meant for a previous turn can
/// never leak into the next turn's wait.
#[derive(Debug)]
pub struct PlaybackGate {
    slot: Mutex<Slot>,
}

#[derive(Debug)]
struct Slot {
    tx: Option<oneshot::Sender<()>>,
    rx: Option<oneshot::Receiver<()>>,
}

impl Slot {
    fn fresh() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            tx: Some(tx),
            rx: Some(rx),
        }
    }
}

impl Default for PlaybackGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackGate {
    /// Create an armed gate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::fresh()),
        }
    }

    /// Discard any stale pair and install a fresh one.
    pub fn arm(&self) {
        *self.slot.lock().unwrap() = Slot::fresh();
    }

    /// Resolve the current slot. Harmless no-op when the slot has already
    /// been resolved or nothing is armed.
    pub fn complete(&self) {
        let tx = self.slot.lock().unwrap().tx.take();
        if let Some(tx) = tx {
            // Receiver may already be gone; that's fine.
            let _ = tx.send(());
        }
    }

    /// Wait for the current slot to resolve, bounded by `timeout`.
    ///
    /// A dropped sender (the gate was re-armed mid-wait) counts as
    /// completed - the waiter must never hang on a stale slot.
    pub async fn wait(&self, timeout: Duration) -> WaitOutcome {
        let rx = self.slot.lock().unwrap().rx.take();
        let Some(rx) = rx else {
            return WaitOutcome::Completed;
        };
        match tokio::time::timeout(timeout, rx).await {
            Ok(_) => WaitOutcome::Completed,
            Err(_) => WaitOutcome::TimedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn wait_resolves_when_completed() {
        let gate = PlaybackGate::new();
        gate.complete();
        assert_eq!(gate.wait(SHORT).await, WaitOutcome::Completed);
    }

    #[tokio::test]
    async fn wait_times_out_without_signal() {
        let gate = PlaybackGate::new();
        assert_eq!(gate.wait(SHORT).await, WaitOutcome::TimedOut);
    }

    #[tokio::test]
    async fn early_signal_satisfies_the_next_wait() {
        let gate = PlaybackGate::new();
        // Signal arrives while the loop is still generating.
        gate.complete();
        assert_eq!(gate.wait(SHORT).await, WaitOutcome::Completed);
    }

    #[tokio::test]
    async fn rearm_clears_a_stale_signal() {
        let gate = PlaybackGate::new();
        gate.complete();
        gate.arm();
        assert_eq!(gate.wait(SHORT).await, WaitOutcome::TimedOut);
    }

    #[tokio::test]
    async fn double_complete_is_harmless() {
        let gate = PlaybackGate::new();
        gate.complete();
        gate.complete();
        assert_eq!(gate.wait(SHORT).await, WaitOutcome::Completed);
    }

    #[tokio::test]
    async fn concurrent_signal_unblocks_waiter() {
        let gate = std::sync::Arc::new(PlaybackGate::new());
        let signaller = std::sync::Arc::clone(&gate);
        let waiter = tokio::spawn(async move { gate.wait(Duration::from_secs(5)).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        signaller.complete();
        assert_eq!(waiter.await.unwrap(), WaitOutcome::Completed);
    }
}

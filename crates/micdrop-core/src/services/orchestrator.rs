//! Debate orchestrator - owns the session state and drives the turn loop.
//!
//! Single-flight semantics: at most one turn loop is active per process.
//! Starting a new debate or resetting always cancels the prior loop first.
//! The loop captures its own state handle at spawn, so a cancelled loop can
//! only ever write to the state instance it was born with - never to a
//! newly installed one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::{
    DebateState, JUDGE_ERROR_WINNER, Rapper, TURN_SKIPPED_PLACEHOLDER, Topic, TurnRecord,
};
use crate::events::DebateSnapshot;
use crate::ports::{DebateEventEmitter, DebateServiceFactory};
use crate::services::playback::{PlaybackGate, WaitOutcome};

/// Shared handle to one debate's session state.
type SharedState = Arc<Mutex<DebateState>>;

/// Knobs for the turn loop. Production uses [`DebateTuning::default`];
/// tests shrink the turn count and timeout.
#[derive(Debug, Clone)]
pub struct DebateTuning {
    /// Total turns per debate. Must be even so turns alternate evenly.
    pub max_turns: u32,
    /// Token budget for one generated verse.
    pub max_tokens_per_turn: u32,
    /// Provider voice for rapper 1 (also used for the introduction).
    pub rapper1_voice: String,
    /// Provider voice for rapper 2.
    pub rapper2_voice: String,
    /// Upper bound on waiting for the client playback acknowledgement.
    pub playback_timeout: Duration,
}

impl Default for DebateTuning {
    fn default() -> Self {
        Self {
            max_turns: 6,
            max_tokens_per_turn: 150,
            rapper1_voice: "en-US-GuyNeural".to_string(),
            rapper2_voice: "en-US-JennyNeural".to_string(),
            playback_timeout: Duration::from_secs(60),
        }
    }
}

struct Inner {
    state: SharedState,
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

/// Orchestrates the full lifecycle of a rap debate.
///
/// Owns the session state exclusively; external callers read snapshots via
/// [`current_state`](Self::current_state) and submit commands. Every state
/// mutation is followed by a best-effort snapshot broadcast through the
/// injected emitter.
pub struct DebateOrchestrator {
    factory: Arc<dyn DebateServiceFactory>,
    emitter: Arc<dyn DebateEventEmitter>,
    tuning: DebateTuning,
    gate: PlaybackGate,
    inner: Mutex<Inner>,
}

impl DebateOrchestrator {
    /// Create an orchestrator with default tuning.
    pub fn new(
        factory: Arc<dyn DebateServiceFactory>,
        emitter: Arc<dyn DebateEventEmitter>,
    ) -> Self {
        Self::with_tuning(factory, emitter, DebateTuning::default())
    }

    /// Create an orchestrator with explicit tuning.
    pub fn with_tuning(
        factory: Arc<dyn DebateServiceFactory>,
        emitter: Arc<dyn DebateEventEmitter>,
        tuning: DebateTuning,
    ) -> Self {
        assert!(
            tuning.max_turns % 2 == 0,
            "max_turns must be even so turns alternate evenly"
        );
        Self {
            factory,
            emitter,
            tuning,
            gate: PlaybackGate::new(),
            inner: Mutex::new(Inner {
                state: Arc::new(Mutex::new(DebateState::empty())),
                cancel: None,
                task: None,
            }),
        }
    }

    /// Snapshot of the current session state.
    pub fn current_state(&self) -> DebateState {
        let inner = self.inner.lock().unwrap();
        let snapshot = inner.state.lock().unwrap().clone();
        snapshot
    }

    /// Cancel any in-flight loop and install a fresh empty state.
    ///
    /// Force-completes a pending playback wait so a blocked loop iteration
    /// unblocks immediately instead of deadlocking on a stale waiter.
    /// Idempotent - safe to call with no active debate.
    pub fn reset_debate(&self) {
        let state = {
            let mut inner = self.inner.lock().unwrap();
            if let Some(cancel) = inner.cancel.take() {
                cancel.cancel();
            }
            inner.task.take();
            self.gate.complete();
            self.gate.arm();
            inner.state = Arc::new(Mutex::new(DebateState::empty()));
            Arc::clone(&inner.state)
        };
        self.broadcast(&state);
    }

    /// Resolve the current playback wait. Harmless no-op when no turn is
    /// waiting.
    pub fn signal_audio_playback_complete(&self) {
        self.gate.complete();
    }

    /// Start a new debate, implicitly resetting any in-flight one.
    ///
    /// Builds the initial state with an introduction line, broadcasts it,
    /// synthesizes the introduction best-effort, then launches the turn
    /// loop as a detached background task. Returns once the introduction
    /// step completes; the loop continues asynchronously.
    pub async fn start_new_debate(self: Arc<Self>, rapper1: Rapper, rapper2: Rapper, topic: Topic) {
        self.reset_debate();

        let cancel = CancellationToken::new();
        let state: SharedState = Arc::new(Mutex::new(DebateState::for_new_debate(
            rapper1.clone(),
            rapper2.clone(),
            topic.clone(),
            self.tuning.max_turns,
        )));
        {
            let mut inner = self.inner.lock().unwrap();
            inner.state = Arc::clone(&state);
            inner.cancel = Some(cancel.clone());
        }
        self.broadcast(&state);

        self.generate_introduction(&state).await;
        tracing::info!(
            rapper1 = %rapper1.name,
            rapper2 = %rapper2.name,
            topic = %topic.title,
            "debate started"
        );

        let this = Arc::clone(&self);
        let task = tokio::spawn(async move { this.run_debate_turns(state, cancel).await });
        self.inner.lock().unwrap().task = Some(task);
    }

    /// Synthesize the introduction line in rapper 1's voice, best-effort.
    async fn generate_introduction(&self, state: &SharedState) {
        let intro = state.lock().unwrap().current_turn_text.clone();
        let scope = self.factory.create_scope();
        match scope
            .speech
            .synthesize(&intro, &self.tuning.rapper1_voice)
            .await
        {
            Ok(audio) => {
                state.lock().unwrap().current_turn_audio = audio;
            }
            Err(err) => {
                tracing::error!(%err, "error generating intro speech");
                state.lock().unwrap().current_turn_audio = Vec::new();
            }
        }
        self.broadcast(state);
        self.gate.arm();
    }

    /// The turn loop. Runs detached until cancelled or `max_turns` is
    /// reached, then judges and persists the outcome.
    async fn run_debate_turns(self: Arc<Self>, state: SharedState, cancel: CancellationToken) {
        while state.lock().unwrap().current_turn < self.tuning.max_turns {
            if cancel.is_cancelled() {
                return self.finish_cancelled(&state);
            }
            // One scope per turn, dropped at iteration end.
            let scope = self.factory.create_scope();

            {
                let mut s = state.lock().unwrap();
                s.current_turn += 1;
                s.is_generating_turn = true;
                s.error_message.clear();
            }
            self.broadcast(&state);

            let (current, voice, turn, prompt) = {
                let s = state.lock().unwrap();
                let (current, opponent, role, voice) = if s.is_rapper1_turn {
                    (
                        s.rapper1.name.clone(),
                        s.rapper2.name.clone(),
                        "Pro",
                        self.tuning.rapper1_voice.clone(),
                    )
                } else {
                    (
                        s.rapper2.name.clone(),
                        s.rapper1.name.clone(),
                        "Con",
                        self.tuning.rapper2_voice.clone(),
                    )
                };
                let prompt = build_turn_prompt(
                    &current,
                    &opponent,
                    &s.topic.title,
                    role,
                    s.current_turn,
                    self.tuning.max_turns,
                    &s.render_transcript(),
                );
                (current, voice, s.current_turn, prompt)
            };

            let Some(generated) = cancellable(
                &cancel,
                scope
                    .ai
                    .generate_turn_text(&prompt, self.tuning.max_tokens_per_turn),
            )
            .await
            else {
                return self.finish_cancelled(&state);
            };
            {
                let mut s = state.lock().unwrap();
                match generated {
                    Ok(text) => {
                        s.current_turn_text.clone_from(&text);
                        s.transcript.push(TurnRecord {
                            speaker: current.clone(),
                            turn,
                            text,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(turn, rapper = %current, %err, "turn generation failed");
                        s.current_turn_text = TURN_SKIPPED_PLACEHOLDER.to_string();
                        s.error_message = format!("Error generating rap for {current}: {err}");
                        s.transcript.push(TurnRecord {
                            speaker: current.clone(),
                            turn,
                            text: TURN_SKIPPED_PLACEHOLDER.to_string(),
                        });
                    }
                }
            }

            let turn_text = state.lock().unwrap().current_turn_text.clone();
            let Some(synthesized) =
                cancellable(&cancel, scope.speech.synthesize(&turn_text, &voice)).await
            else {
                return self.finish_cancelled(&state);
            };
            {
                let mut s = state.lock().unwrap();
                s.current_turn_audio = match synthesized {
                    Ok(audio) => audio,
                    Err(err) => {
                        tracing::error!(turn, %err, "error generating speech for turn");
                        Vec::new()
                    }
                };
            }

            self.broadcast(&state);

            // Wait for audio playback with timeout - don't hang if the
            // client never responds.
            let has_audio = !state.lock().unwrap().current_turn_audio.is_empty();
            if has_audio {
                let Some(outcome) =
                    cancellable(&cancel, self.gate.wait(self.tuning.playback_timeout)).await
                else {
                    return self.finish_cancelled(&state);
                };
                if outcome == WaitOutcome::TimedOut {
                    tracing::warn!(turn, "audio playback timed out, continuing");
                }
            }

            self.gate.arm();
            {
                let mut s = state.lock().unwrap();
                s.is_rapper1_turn = !s.is_rapper1_turn;
            }
        }

        if cancel.is_cancelled() {
            return self.finish_cancelled(&state);
        }
        self.judge_and_finish(&state, &cancel).await;
    }

    /// Judge the finished transcript, persist the outcome, and mark the
    /// debate finished.
    async fn judge_and_finish(&self, state: &SharedState, cancel: &CancellationToken) {
        {
            let mut s = state.lock().unwrap();
            s.is_in_progress = false;
            s.is_generating_turn = true;
        }
        self.broadcast(state);

        let scope = self.factory.create_scope();
        let (transcript, rapper1, rapper2, topic_title) = {
            let s = state.lock().unwrap();
            (
                s.render_transcript(),
                s.rapper1.name.clone(),
                s.rapper2.name.clone(),
                s.topic.title.clone(),
            )
        };

        let Some(judged) = cancellable(
            cancel,
            scope
                .ai
                .judge_debate(&transcript, &rapper1, &rapper2, &topic_title),
        )
        .await
        else {
            return self.finish_cancelled(state);
        };
        match judged {
            Ok(verdict) => {
                {
                    let mut s = state.lock().unwrap();
                    s.winner_name.clone_from(&verdict.winner_name);
                    s.judge_reasoning = verdict.reasoning;
                    s.stats = verdict.stats;
                }
                // Sentinel winners and strangers never touch the store.
                if verdict.winner_name == rapper1 || verdict.winner_name == rapper2 {
                    let loser = if verdict.winner_name == rapper1 {
                        rapper2
                    } else {
                        rapper1
                    };
                    if let Err(err) = scope.rappers.record_outcome(&verdict.winner_name, &loser).await
                    {
                        tracing::error!(%err, "failed to persist win/loss record");
                    }
                }
            }
            Err(err) => {
                tracing::error!(%err, "error judging debate");
                let mut s = state.lock().unwrap();
                s.winner_name = JUDGE_ERROR_WINNER.to_string();
                s.judge_reasoning = format!("Error during judging: {err}");
            }
        }

        {
            let mut s = state.lock().unwrap();
            s.is_finished = true;
            s.is_generating_turn = false;
        }
        self.broadcast(state);
    }

    /// Cancellation branch: mark the captured state not-in-progress with an
    /// explanatory message and exit without judging.
    fn finish_cancelled(&self, state: &SharedState) {
        {
            let mut s = state.lock().unwrap();
            s.error_message = "Debate cancelled by user.".to_string();
            s.is_in_progress = false;
            s.is_generating_turn = false;
        }
        self.broadcast(state);
        tracing::info!("debate loop cancelled");
    }

    /// Best-effort push of the current state to all observers.
    fn broadcast(&self, state: &SharedState) {
        let snapshot = DebateSnapshot::of(&state.lock().unwrap());
        self.emitter.emit(snapshot);
    }
}

/// Race a future against the loop's cancellation token.
async fn cancellable<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = T>,
) -> Option<T> {
    tokio::select! {
        () = cancel.cancelled() => None,
        out = fut => Some(out),
    }
}

/// Transcript-conditioned prompt for one turn, with an explicit verse-length
/// bound.
fn build_turn_prompt(
    current: &str,
    opponent: &str,
    topic: &str,
    role: &str,
    turn: u32,
    max_turns: u32,
    transcript: &str,
) -> String {
    let round = (turn + 1) / 2;
    let total_rounds = max_turns / 2;
    format!(
        "You are {current} in a rap battle against {opponent} on '{topic}'. \
         Role: {role}. Round {round}/{total_rounds}. \
         IMPORTANT: Your verse MUST be exactly 8 lines or fewer. Do not exceed 8 lines. \
         Transcript so far:\n{transcript}\nYour rap verse (max 8 lines):"
    )
}

//! Axum handlers for the `/api/debate/*` endpoints.
//!
//! The live debate flow streams over SSE; the state endpoint exists for
//! polling clients and diagnostics.

use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures_util::stream::Stream;

use micdrop_core::domain::{Rapper, Topic};
use micdrop_core::utils::validation::validate_debate_input;

use crate::dto::{DebateStateResponse, MessageResponse, StartDebateRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// `GET /api/debate/state`
pub async fn state(State(state): State<AppState>) -> Json<DebateStateResponse> {
    let current = state.orchestrator.current_state();
    Json(DebateStateResponse::from(&current))
}

/// `POST /api/debate/start`
pub async fn start(
    State(state): State<AppState>,
    Json(req): Json<StartDebateRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    validate_debate_input(&req.rapper1_name, &req.rapper2_name, &req.topic_title)?;

    let topic = Topic::new(
        req.topic_title,
        req.topic_category.unwrap_or_default(),
        req.topic_description.unwrap_or_default(),
    );
    Arc::clone(&state.orchestrator)
        .start_new_debate(
            Rapper::new(req.rapper1_name),
            Rapper::new(req.rapper2_name),
            topic,
        )
        .await;
    Ok(Json(MessageResponse::new("Debate started.")))
}

/// `POST /api/debate/reset`
pub async fn reset(State(state): State<AppState>) -> Json<MessageResponse> {
    state.orchestrator.reset_debate();
    Json(MessageResponse::new("Debate reset."))
}

/// `POST /api/debate/audio-complete`
pub async fn audio_complete(State(state): State<AppState>) -> Json<MessageResponse> {
    state.orchestrator.signal_audio_playback_complete();
    Json(MessageResponse::new("Playback acknowledged."))
}

/// `GET /api/debate/events` - SSE snapshot stream.
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
    Arc::clone(&state.sse).subscribe()
}

//! Axum handler for the `/api/speech/synthesize` endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::dto::SpeechRequest;
use crate::error::HttpError;
use crate::state::AppState;

/// Voice used when the request doesn't name one (the Victorian English
/// narrator).
const DEFAULT_VOICE: &str = "en-GB-RyanNeural";

/// `POST /api/speech/synthesize`
pub async fn synthesize(
    State(state): State<AppState>,
    Json(req): Json<SpeechRequest>,
) -> Result<impl IntoResponse, HttpError> {
    if req.text.trim().is_empty() {
        return Err(HttpError::BadRequest("Text is required.".to_string()));
    }
    let voice = req.voice_name.as_deref().unwrap_or(DEFAULT_VOICE);
    let audio = state.speech.synthesize(&req.text, voice).await?;
    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio))
}

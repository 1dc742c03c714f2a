//! Axum handlers for the `/api/lyrics/*` endpoints.

use axum::Json;
use axum::extract::{Path, State};

use micdrop_core::utils::validation::validate_lyrics_input;

use crate::dto::LyricsResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// `GET /api/lyrics/songs`
pub async fn songs(State(state): State<AppState>) -> Result<Json<Vec<String>>, HttpError> {
    Ok(Json(state.lyrics.available_songs().await?))
}

/// `GET /api/lyrics/random`
pub async fn random(State(state): State<AppState>) -> Result<Json<LyricsResponse>, HttpError> {
    let (title, lyrics) = state
        .lyrics
        .random_lyrics()
        .await?
        .ok_or_else(|| HttpError::NotFound("lyrics collection is empty".to_string()))?;
    Ok(Json(LyricsResponse { title, lyrics }))
}

/// `GET /api/lyrics/{title}`
pub async fn by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<LyricsResponse>, HttpError> {
    validate_lyrics_input(&title)?;
    let lyrics = state
        .lyrics
        .lyrics(&title)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("no lyrics for '{title}'")))?;
    Ok(Json(LyricsResponse { title, lyrics }))
}

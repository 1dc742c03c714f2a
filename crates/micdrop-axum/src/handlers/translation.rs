//! Axum handler for the `/api/translation` endpoint.

use axum::Json;
use axum::extract::State;

use crate::dto::{TranslationRequest, TranslationResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// `POST /api/translation`
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, HttpError> {
    let translated = state.translation.translate(&req.text).await?;
    Ok(Json(TranslationResponse {
        original_text: req.text,
        translated_text: translated,
    }))
}

//! Axum handler for the `/api/topics` endpoint.

use axum::Json;
use axum::extract::State;

use micdrop_core::domain::Topic;

use crate::state::AppState;

/// `GET /api/topics`
///
/// Never fails: the service falls back to the static catalog when the news
/// provider is unavailable.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Topic>> {
    Json(state.topics.topics().await)
}

//! Axum handler for the `/api/rappers` endpoint.

use axum::Json;
use axum::extract::State;

use micdrop_core::domain::Rapper;

use crate::state::AppState;

/// `GET /api/rappers`
///
/// A broken store degrades to an empty roster rather than an error - the
/// battle UI can still run with manually entered names.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Rapper>> {
    match state.rappers.list().await {
        Ok(rappers) => Json(rappers),
        Err(err) => {
            tracing::warn!(%err, "failed to retrieve rappers from storage");
            Json(Vec::new())
        }
    }
}

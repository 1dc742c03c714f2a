//! Axum handler for the `/api/diagnostics` endpoint.

use axum::Json;
use axum::extract::State;

use micdrop_core::domain::DiagnosticResult;

use crate::state::AppState;

/// `GET /api/diagnostics`
pub async fn run(State(state): State<AppState>) -> Json<Vec<DiagnosticResult>> {
    Json(state.diagnostics.run_all().await)
}

//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Build all API routes without the `/api` prefix (for nesting under
/// `/api`).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Debate API - commands plus a polling state endpoint; the live
        // flow streams over /debate/events
        .route("/debate/state", get(handlers::debate::state))
        .route("/debate/start", post(handlers::debate::start))
        .route("/debate/reset", post(handlers::debate::reset))
        .route(
            "/debate/audio-complete",
            post(handlers::debate::audio_complete),
        )
        .route("/debate/events", get(handlers::debate::events))
        // Rappers API
        .route("/rappers", get(handlers::rappers::list))
        // Topics API
        .route("/topics", get(handlers::topics::list))
        // Translation API
        .route("/translation", post(handlers::translation::translate))
        // Lyrics API
        .route("/lyrics/songs", get(handlers::lyrics::songs))
        .route("/lyrics/random", get(handlers::lyrics::random))
        .route("/lyrics/{title}", get(handlers::lyrics::by_title))
        // Speech API
        .route("/speech/synthesize", post(handlers::speech::synthesize))
        // Diagnostics API
        .route("/diagnostics", get(handlers::diagnostics::run))
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{title}`
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);
    // Demo app: every origin may talk to the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

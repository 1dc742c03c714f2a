//! Axum web adapter for micdrop.
//!
//! Thin HTTP handlers over the core services, an SSE broadcaster
//! implementing the core emitter port, and the composition root where all
//! infrastructure is wired together.

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod sse;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use sse::SseBroadcaster;
pub use state::AppState;

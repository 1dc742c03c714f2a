//! NewsAPI client for micdrop.
//!
//! Implements the core news provider port over the NewsAPI top-headlines
//! endpoint. Wire types are confined to this crate; the port surface only
//! speaks in domain headlines.

mod client;
mod health;
mod wire;

pub use client::NewsApiClient;
pub use health::NewsHealthCheck;

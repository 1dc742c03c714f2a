//! Azure Speech REST client for micdrop.
//!
//! Implements the core speech synthesizer port over the provider's REST
//! API: a bearer token is issued from the region's token endpoint and
//! cached, and synthesis posts SSML and returns MP3 bytes.

mod client;
mod config;
mod health;
mod ssml;

pub use client::SpeechClient;
pub use config::SpeechClientConfig;
pub use health::SpeechHealthCheck;

//! `SQLite` repository implementations for micdrop.
//!
//! The `SqlitePool` is confined to this crate and never exposed through the
//! port trait signatures defined in `micdrop-core`.

pub mod health;
pub mod repositories;
pub mod setup;

pub use health::StorageHealthCheck;
pub use repositories::SqliteRapperRepository;
pub use setup::{create_test_pool, setup_database};

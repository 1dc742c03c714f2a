//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.

mod sqlite_rapper_repository;

pub use sqlite_rapper_repository::SqliteRapperRepository;

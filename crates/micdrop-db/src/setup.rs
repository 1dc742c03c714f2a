//! Database setup - pool construction and schema bootstrap.
//!
//! Focused purely on construction; no domain logic lives here.

use std::path::Path;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Special database path selecting an in-memory store.
pub const MEMORY_PATH: &str = ":memory:";

/// Open (creating if missing) the sqlite database at `path` and apply the
/// schema.
///
/// Passing [`MEMORY_PATH`] yields an in-memory database, used by tests and
/// ephemeral deployments.
pub async fn setup_database(path: &str) -> Result<SqlitePool> {
    let pool = if path == MEMORY_PATH {
        memory_pool().await?
    } else {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        SqlitePool::connect_with(options).await?
    };

    apply_schema(&pool).await?;
    tracing::debug!(path, "database ready");
    Ok(pool)
}

/// Create an in-memory pool with the schema applied, for tests.
pub async fn create_test_pool() -> Result<SqlitePool> {
    let pool = memory_pool().await?;
    apply_schema(&pool).await?;
    Ok(pool)
}

// An in-memory sqlite database exists per connection; cap the pool at one
// connection so every query sees the same store.
async fn memory_pool() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS rappers (
            name TEXT PRIMARY KEY NOT NULL,
            wins INTEGER NOT NULL DEFAULT 0,
            losses INTEGER NOT NULL DEFAULT 0,
            total_debates INTEGER NOT NULL DEFAULT 0
        )
        ",
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_has_schema() {
        let pool = create_test_pool().await.unwrap();
        sqlx::query("SELECT name, wins, losses, total_debates FROM rappers")
            .fetch_all(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn file_database_is_created_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store").join("micdrop.db");
        let pool = setup_database(path.to_str().unwrap()).await.unwrap();
        sqlx::query("SELECT COUNT(*) FROM rappers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(path.exists());
    }
}

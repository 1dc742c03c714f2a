//! `SQLite` implementation of the `RapperRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use micdrop_core::domain::{DEFAULT_ROSTER, Rapper};
use micdrop_core::ports::{RapperRepository, RepositoryError};

/// `SQLite`-backed win/loss store keyed by rapper name.
pub struct SqliteRapperRepository {
    pool: SqlitePool,
}

impl SqliteRapperRepository {
    /// Create a repository over an initialized pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn row_to_rapper(row: &sqlx::sqlite::SqliteRow) -> Rapper {
    Rapper {
        name: row.get("name"),
        wins: row.get("wins"),
        losses: row.get("losses"),
        total_debates: row.get("total_debates"),
    }
}

#[async_trait]
impl RapperRepository for SqliteRapperRepository {
    async fn list(&self) -> Result<Vec<Rapper>, RepositoryError> {
        let rows =
            sqlx::query("SELECT name, wins, losses, total_debates FROM rappers ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(storage_err)?;
        Ok(rows.iter().map(row_to_rapper).collect())
    }

    async fn get(&self, name: &str) -> Result<Option<Rapper>, RepositoryError> {
        let row =
            sqlx::query("SELECT name, wins, losses, total_debates FROM rappers WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_err)?;
        Ok(row.as_ref().map(row_to_rapper))
    }

    async fn record_outcome(&self, winner: &str, loser: &str) -> Result<(), RepositoryError> {
        tracing::info!(winner, loser, "updating win/loss record");
        let mut tx = self.pool.begin().await.map_err(storage_err)?;

        sqlx::query(
            r"
            INSERT INTO rappers (name, wins, losses, total_debates)
            VALUES (?, 1, 0, 1)
            ON CONFLICT(name) DO UPDATE SET
                wins = wins + 1,
                total_debates = total_debates + 1
            ",
        )
        .bind(winner)
        .execute(&mut *tx)
        .await
        .map_err(storage_err)?;

        sqlx::query(
            r"
            INSERT INTO rappers (name, wins, losses, total_debates)
            VALUES (?, 0, 1, 1)
            ON CONFLICT(name) DO UPDATE SET
                losses = losses + 1,
                total_debates = total_debates + 1
            ",
        )
        .bind(loser)
        .execute(&mut *tx)
        .await
        .map_err(storage_err)?;

        tx.commit().await.map_err(storage_err)
    }

    async fn seed_defaults(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM rappers")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_err)?
            .get("n");
        if count > 0 {
            tracing::debug!(count, "rappers already exist, skipping seeding");
            return Ok(0);
        }

        let mut inserted = 0;
        for name in DEFAULT_ROSTER {
            sqlx::query(
                "INSERT OR IGNORE INTO rappers (name, wins, losses, total_debates) VALUES (?, 0, 0, 0)",
            )
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
            inserted += 1;
        }
        tracing::info!(inserted, "seeded initial rappers");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::create_test_pool;

    async fn repo() -> SqliteRapperRepository {
        SqliteRapperRepository::new(create_test_pool().await.unwrap())
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.get("Alpha").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn record_outcome_creates_missing_records_with_increments() {
        let repo = repo().await;
        repo.record_outcome("Alpha", "Beta").await.unwrap();

        let winner = repo.get("Alpha").await.unwrap().unwrap();
        assert_eq!(winner.wins, 1);
        assert_eq!(winner.losses, 0);
        assert_eq!(winner.total_debates, 1);

        let loser = repo.get("Beta").await.unwrap().unwrap();
        assert_eq!(loser.wins, 0);
        assert_eq!(loser.losses, 1);
        assert_eq!(loser.total_debates, 1);
    }

    #[tokio::test]
    async fn record_outcome_increments_existing_records() {
        let repo = repo().await;
        repo.record_outcome("Alpha", "Beta").await.unwrap();
        repo.record_outcome("Beta", "Alpha").await.unwrap();
        repo.record_outcome("Alpha", "Beta").await.unwrap();

        let alpha = repo.get("Alpha").await.unwrap().unwrap();
        assert_eq!(alpha.wins, 2);
        assert_eq!(alpha.losses, 1);
        assert_eq!(alpha.total_debates, 3);

        let beta = repo.get("Beta").await.unwrap().unwrap();
        assert_eq!(beta.wins, 1);
        assert_eq!(beta.losses, 2);
        assert_eq!(beta.total_debates, 3);
    }

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let repo = repo().await;
        repo.record_outcome("Zed", "Alpha").await.unwrap();
        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Alpha", "Zed"]);
    }

    #[tokio::test]
    async fn seeding_fills_an_empty_store_once() {
        let repo = repo().await;
        let first = repo.seed_defaults().await.unwrap();
        assert_eq!(first as usize, DEFAULT_ROSTER.len());
        assert_eq!(repo.list().await.unwrap().len(), DEFAULT_ROSTER.len());

        let second = repo.seed_defaults().await.unwrap();
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn seeding_skips_a_populated_store() {
        let repo = repo().await;
        repo.record_outcome("Alpha", "Beta").await.unwrap();
        assert_eq!(repo.seed_defaults().await.unwrap(), 0);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}

//! Health check for the sqlite store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use micdrop_core::domain::DiagnosticResult;
use micdrop_core::ports::HealthCheck;

/// Probes the database with a trivial query.
pub struct StorageHealthCheck {
    pool: SqlitePool,
}

impl StorageHealthCheck {
    /// Create a check over the shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for StorageHealthCheck {
    fn name(&self) -> &'static str {
        "storage"
    }

    async fn run(&self) -> DiagnosticResult {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => DiagnosticResult::healthy(self.name(), "database reachable"),
            Err(err) => DiagnosticResult::unhealthy(self.name(), err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::create_test_pool;

    #[tokio::test]
    async fn live_pool_is_healthy() {
        let pool = create_test_pool().await.unwrap();
        let result = StorageHealthCheck::new(pool).run().await;
        assert!(result.success);
        assert_eq!(result.check_name, "storage");
    }

    #[tokio::test]
    async fn closed_pool_is_unhealthy() {
        let pool = create_test_pool().await.unwrap();
        pool.close().await;
        let result = StorageHealthCheck::new(pool).run().await;
        assert!(!result.success);
    }
}

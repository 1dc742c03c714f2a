//! Rapper repository port - durable win/loss counters keyed by name.

use async_trait::async_trait;

use crate::domain::Rapper;
use crate::ports::RepositoryError;

/// Durable store of rapper win/loss records.
#[async_trait]
pub trait RapperRepository: Send + Sync {
    /// List all rappers, ordered by name.
    async fn list(&self) -> Result<Vec<Rapper>, RepositoryError>;

    /// Look up one rapper by name.
    async fn get(&self, name: &str) -> Result<Option<Rapper>, RepositoryError>;

    /// Record a debate outcome: winner's win count +1, loser's loss count
    /// +1, both debate counts +1. Missing records are created with the
    /// increment applied.
    async fn record_outcome(&self, winner: &str, loser: &str) -> Result<(), RepositoryError>;

    /// Seed the default roster into an empty store. Returns the number of
    /// records inserted (0 when the store already has rows).
    async fn seed_defaults(&self) -> Result<u64, RepositoryError>;
}

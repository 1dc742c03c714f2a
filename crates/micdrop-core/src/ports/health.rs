//! Health check port for diagnostics over external collaborators.

use async_trait::async_trait;

use crate::domain::DiagnosticResult;

/// One named probe of an external collaborator.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Stable check name, used as the result key.
    fn name(&self) -> &'static str;

    /// Run the probe. Failures are reported as results, never as errors.
    async fn run(&self) -> DiagnosticResult;
}

//! Diagnostics - runs every registered health check and collects results.

use std::sync::Arc;

use crate::domain::DiagnosticResult;
use crate::ports::HealthCheck;

/// Aggregates health checks over the external collaborators.
///
/// Check failures are reported as results and logged; they never propagate
/// as errors.
#[derive(Default)]
pub struct DiagnosticsService {
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl DiagnosticsService {
    /// Create an empty diagnostics service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a health check.
    #[must_use]
    pub fn with_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Run all registered checks in registration order.
    pub async fn run_all(&self) -> Vec<DiagnosticResult> {
        let mut results = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let result = check.run().await;
            if !result.success {
                tracing::warn!(check = check.name(), message = %result.message, "health check failed");
            }
            results.push(result);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedCheck {
        name: &'static str,
        healthy: bool,
    }

    #[async_trait]
    impl HealthCheck for FixedCheck {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn run(&self) -> DiagnosticResult {
            if self.healthy {
                DiagnosticResult::healthy(self.name, "ok")
            } else {
                DiagnosticResult::unhealthy(self.name, "down")
            }
        }
    }

    #[tokio::test]
    async fn runs_checks_in_registration_order() {
        let service = DiagnosticsService::new()
            .with_check(Arc::new(FixedCheck {
                name: "storage",
                healthy: true,
            }))
            .with_check(Arc::new(FixedCheck {
                name: "speech",
                healthy: false,
            }));

        let results = service.run_all().await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].check_name, "storage");
        assert!(results[0].success);
        assert_eq!(results[1].check_name, "speech");
        assert!(!results[1].success);
    }

    #[tokio::test]
    async fn empty_service_yields_no_results() {
        let results = DiagnosticsService::new().run_all().await;
        assert!(results.is_empty());
    }
}

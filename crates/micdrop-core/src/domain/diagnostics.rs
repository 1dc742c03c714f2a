//! Diagnostics result type produced by health checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one named health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub check_name: String,
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl DiagnosticResult {
    /// A passing result.
    #[must_use]
    pub fn healthy(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            success: true,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// A failing result.
    #[must_use]
    pub fn unhealthy(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            success: false,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

//! News headline type, mapped from whatever the news provider returns.

use serde::{Deserialize, Serialize};

/// A news headline used as a debate topic suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsHeadline {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
}

//! Rapper domain type - a named contestant with a persisted win/loss record.

use serde::{Deserialize, Serialize};

/// Roster seeded into an empty win/loss store.
pub const DEFAULT_ROSTER: [&str; 10] = [
    "Eminem",
    "Kendrick Lamar",
    "Tupac Shakur",
    "The Notorious B.I.G.",
    "Nas",
    "Jay-Z",
    "Rakim",
    "Andre 3000",
    "Lauryn Hill",
    "Snoop Dogg",
];

/// A contestant. Identity is the name, which is the unique key in the
/// win/loss store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rapper {
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub total_debates: i64,
}

impl Rapper {
    /// Create a rapper with a zeroed record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

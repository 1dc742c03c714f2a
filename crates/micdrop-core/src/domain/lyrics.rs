//! Song lyrics collection loaded from a JSON file.

use serde::{Deserialize, Serialize};

/// Collection of song lyrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LyricsCollection {
    #[serde(default)]
    pub songs: Vec<SongEntry>,
}

/// Individual song entry with title and lyrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongEntry {
    pub title: String,
    #[serde(rename = "content")]
    pub lyrics: String,
}

//! Debate topic type and the static fallback catalog.

use serde::{Deserialize, Serialize};

/// A debate topic. Immutable for the life of a debate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    pub category: String,
    pub description: String,
}

impl Topic {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Display emoji for the topic's category.
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self.category.to_ascii_lowercase().as_str() {
            "technology" => "💻",
            "politics" => "🏛️",
            "sports" => "⚽",
            "entertainment" => "🎬",
            "science" => "🔬",
            "food" => "🍔",
            "philosophy" => "🤔",
            "music" => "🎵",
            "gaming" => "🎮",
            "environment" => "🌍",
            _ => "🎤",
        }
    }

    /// Accent color for the topic's category.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self.category.to_ascii_lowercase().as_str() {
            "technology" => "#4FC3F7",
            "politics" => "#EF5350",
            "sports" => "#66BB6A",
            "entertainment" => "#AB47BC",
            "science" => "#26C6DA",
            "food" => "#FFA726",
            "philosophy" => "#78909C",
            "music" => "#EC407A",
            "gaming" => "#7E57C2",
            "environment" => "#43A047",
            _ => "#9E9E9E",
        }
    }
}

/// Static topic catalog used when the news provider is unavailable.
#[must_use]
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new(
            "AI: Friend or Foe?",
            "Technology",
            "Will AI help or hinder humanity?",
        ),
        Topic::new("Pineapple on Pizza", "Food", "The eternal debate."),
        Topic::new("Tabs vs Spaces", "Technology", "The coder's dilemma."),
        Topic::new("Cats vs Dogs", "Entertainment", "The ultimate pet showdown."),
        Topic::new("Remote vs Office", "Philosophy", "Where is work best done?"),
        Topic::new("PC vs Console", "Gaming", "The gaming platform war."),
        Topic::new(
            "Summer vs Winter",
            "Environment",
            "Which season reigns supreme?",
        ),
        Topic::new("Books vs Movies", "Entertainment", "Story consumption battle."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_maps_to_emoji_and_color() {
        let topic = Topic::new("Tabs vs Spaces", "Technology", "");
        assert_eq!(topic.emoji(), "💻");
        assert_eq!(topic.color(), "#4FC3F7");
    }

    #[test]
    fn unknown_category_falls_back() {
        let topic = Topic::new("Anything", "Obscure", "");
        assert_eq!(topic.emoji(), "🎤");
        assert_eq!(topic.color(), "#9E9E9E");
    }

    #[test]
    fn default_catalog_is_non_empty_with_unique_titles() {
        let topics = default_topics();
        assert!(!topics.is_empty());
        let mut titles: Vec<_> = topics.iter().map(|t| t.title.clone()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), topics.len());
    }
}

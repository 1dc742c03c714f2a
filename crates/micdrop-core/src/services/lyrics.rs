//! Song lyrics lookup over a lazily loaded JSON collection.

use std::path::PathBuf;

use rand::Rng as _;
use tokio::sync::OnceCell;

use crate::domain::LyricsCollection;
use crate::ports::CoreError;

/// Lyrics longer than this many words are truncated with an ellipsis.
const MAX_WORDS: usize = 200;

/// Reads a JSON lyrics collection on first use and serves lookups from the
/// cached copy.
pub struct LyricsService {
    path: PathBuf,
    collection: OnceCell<LyricsCollection>,
}

impl LyricsService {
    /// Create a service over a lyrics JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            collection: OnceCell::new(),
        }
    }

    async fn collection(&self) -> Result<&LyricsCollection, CoreError> {
        self.collection
            .get_or_try_init(|| async {
                let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                    CoreError::Configuration(format!(
                        "lyrics file not found: {}: {e}",
                        self.path.display()
                    ))
                })?;
                let collection: LyricsCollection = serde_json::from_str(&json)
                    .map_err(|e| CoreError::Internal(format!("invalid lyrics collection: {e}")))?;
                tracing::info!(songs = collection.songs.len(), "loaded lyrics collection");
                Ok(collection)
            })
            .await
    }

    /// All song titles, sorted.
    pub async fn available_songs(&self) -> Result<Vec<String>, CoreError> {
        let collection = self.collection().await?;
        let mut titles: Vec<String> = collection.songs.iter().map(|s| s.title.clone()).collect();
        titles.sort();
        Ok(titles)
    }

    /// Lyrics for a title (case-insensitive), capped at 200 words.
    pub async fn lyrics(&self, title: &str) -> Result<Option<String>, CoreError> {
        let collection = self.collection().await?;
        let song = collection
            .songs
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title));
        Ok(song.map(|s| cap_words(&s.lyrics, MAX_WORDS)))
    }

    /// A random song title with its (capped) lyrics.
    pub async fn random_lyrics(&self) -> Result<Option<(String, String)>, CoreError> {
        let collection = self.collection().await?;
        if collection.songs.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..collection.songs.len());
        let song = &collection.songs[index];
        Ok(Some((song.title.clone(), cap_words(&song.lyrics, MAX_WORDS))))
    }
}

fn cap_words(lyrics: &str, max_words: usize) -> String {
    let words: Vec<&str> = lyrics.split_whitespace().collect();
    if words.len() <= max_words {
        lyrics.to_string()
    } else {
        format!("{}...", words[..max_words].join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_collection(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = r#"{
        "songs": [
            { "title": "City Lights", "content": "walking through the city lights" },
            { "title": "Another Dawn", "content": "sunrise over empty streets" }
        ]
    }"#;

    #[tokio::test]
    async fn titles_are_sorted() {
        let file = write_collection(SAMPLE);
        let service = LyricsService::new(file.path());
        let titles = service.available_songs().await.unwrap();
        assert_eq!(titles, ["Another Dawn", "City Lights"]);
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let file = write_collection(SAMPLE);
        let service = LyricsService::new(file.path());
        let lyrics = service.lyrics("city lights").await.unwrap();
        assert_eq!(lyrics.as_deref(), Some("walking through the city lights"));
    }

    #[tokio::test]
    async fn unknown_title_returns_none() {
        let file = write_collection(SAMPLE);
        let service = LyricsService::new(file.path());
        assert!(service.lyrics("No Such Song").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn long_lyrics_are_capped() {
        let long = (0..300).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let json = format!(r#"{{ "songs": [ {{ "title": "Long", "content": "{long}" }} ] }}"#);
        let file = write_collection(&json);
        let service = LyricsService::new(file.path());

        let lyrics = service.lyrics("Long").await.unwrap().unwrap();
        assert!(lyrics.ends_with("..."));
        assert_eq!(lyrics.split_whitespace().count(), 200);
    }

    #[tokio::test]
    async fn random_pick_comes_from_the_collection() {
        let file = write_collection(SAMPLE);
        let service = LyricsService::new(file.path());
        let (title, lyrics) = service.random_lyrics().await.unwrap().unwrap();
        assert!(["City Lights", "Another Dawn"].contains(&title.as_str()));
        assert!(!lyrics.is_empty());
    }

    #[tokio::test]
    async fn empty_collection_yields_no_random_pick() {
        let file = write_collection(r#"{ "songs": [] }"#);
        let service = LyricsService::new(file.path());
        assert!(service.random_lyrics().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_file_is_a_configuration_error() {
        let service = LyricsService::new("/nonexistent/lyrics.json");
        let err = service.available_songs().await.unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}

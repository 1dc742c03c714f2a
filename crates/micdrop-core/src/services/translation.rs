//! Victorian English translation with an in-memory result cache.
//!
//! Translations are expensive LLM calls, so results are cached by input
//! hash. The cache is bounded and entries expire after a day.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::ports::{CoreError, Translator};
use crate::utils::validation::validate_translation_input;

const DEFAULT_CAPACITY: usize = 1000;
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct CacheEntry {
    translated: String,
    inserted_at: Instant,
}

/// Bounded, expiring in-memory cache of translation results.
pub struct TranslationCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TranslationCache {
    /// Cache with explicit bounds.
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
            ttl,
        }
    }

    /// Cache with production bounds (1000 entries, 24 hour expiry).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    fn key(text: &str) -> String {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        format!("{:x}:{}", hasher.finish(), text.len())
    }

    /// Look up a cached translation, dropping it if expired.
    pub fn get(&self, text: &str) -> Option<String> {
        let key = Self::key(text);
        let mut entries = self.entries.lock().unwrap();
        match entries.get(&key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                Some(entry.translated.clone())
            }
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store a translation. At capacity, expired entries are evicted first;
    /// if the cache is still full the new entry is skipped.
    pub fn insert(&self, text: &str, translated: &str) {
        let key = Self::key(text);
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let ttl = self.ttl;
            entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
            if entries.len() >= self.capacity {
                return;
            }
        }
        entries.insert(
            key,
            CacheEntry {
                translated: translated.to_string(),
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of live entries (expired entries may still be counted until
    /// touched).
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Translates modern English to Victorian-era English, caching results.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    cache: TranslationCache,
}

impl TranslationService {
    /// Create a service over a translator port with default cache bounds.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self::with_cache(translator, TranslationCache::with_defaults())
    }

    /// Create a service with an explicit cache (used by tests).
    pub fn with_cache(translator: Arc<dyn Translator>, cache: TranslationCache) -> Self {
        Self { translator, cache }
    }

    /// Translate `text`, serving repeats from the cache.
    pub async fn translate(&self, text: &str) -> Result<String, CoreError> {
        validate_translation_input(text)?;

        if let Some(hit) = self.cache.get(text) {
            tracing::debug!(length = text.len(), "translation cache hit");
            return Ok(hit);
        }

        let translated = self.translator.translate_to_victorian(text).await?;
        self.cache.insert(text, &translated);
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::AiError;
    use crate::ports::translator::MockTranslator;

    #[tokio::test]
    async fn translation_result_is_cached() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate_to_victorian()
            .times(1)
            .returning(|_| Ok("Most splendid tidings".to_string()));

        let service = TranslationService::new(Arc::new(translator));
        let first = service.translate("great news").await.unwrap();
        let second = service.translate("great news").await.unwrap();

        assert_eq!(first, "Most splendid tidings");
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_calling_translator() {
        let translator = MockTranslator::new();
        let service = TranslationService::new(Arc::new(translator));
        let err = service.translate("   ").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn translator_errors_propagate() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate_to_victorian()
            .returning(|_| Err(AiError::NotConfigured));

        let service = TranslationService::new(Arc::new(translator));
        let err = service.translate("hello").await.unwrap_err();
        assert!(matches!(err, CoreError::Ai(AiError::NotConfigured)));
    }

    #[test]
    fn expired_entries_are_dropped_on_read() {
        let cache = TranslationCache::new(10, Duration::from_millis(0));
        cache.insert("a", "b");
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn full_cache_skips_new_entries() {
        let cache = TranslationCache::new(1, Duration::from_secs(60));
        cache.insert("first", "one");
        cache.insert("second", "two");
        assert_eq!(cache.get("first").as_deref(), Some("one"));
        assert_eq!(cache.get("second"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn existing_key_can_be_refreshed_at_capacity() {
        let cache = TranslationCache::new(1, Duration::from_secs(60));
        cache.insert("first", "one");
        cache.insert("first", "uno");
        assert_eq!(cache.get("first").as_deref(), Some("uno"));
    }
}

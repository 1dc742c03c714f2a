//! Debate topic suggestions from news headlines, with a static fallback.

use std::sync::Arc;

use crate::domain::{Topic, default_topics};
use crate::ports::NewsProvider;

/// Number of headlines requested per topics listing.
const HEADLINE_COUNT: usize = 10;

/// Maps current headlines to debate topics, falling back to the static
/// catalog when the provider is unconfigured, fails, or returns nothing.
pub struct TopicsService {
    news: Arc<dyn NewsProvider>,
}

impl TopicsService {
    /// Create a service over a news provider port.
    pub fn new(news: Arc<dyn NewsProvider>) -> Self {
        Self { news }
    }

    /// Current topic suggestions. Never fails - degraded providers yield
    /// the fallback catalog.
    pub async fn topics(&self) -> Vec<Topic> {
        match self.news.top_headlines(HEADLINE_COUNT).await {
            Ok(headlines) if !headlines.is_empty() => headlines
                .into_iter()
                .map(|h| Topic::new(h.title, "News", h.description.unwrap_or_default()))
                .collect(),
            Ok(_) => default_topics(),
            Err(err) => {
                tracing::warn!(%err, "failed to fetch news headlines, using fallback topics");
                default_topics()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewsHeadline;
    use crate::ports::NewsError;
    use crate::ports::news::MockNewsProvider;

    #[tokio::test]
    async fn headlines_become_news_topics() {
        let mut news = MockNewsProvider::new();
        news.expect_top_headlines().returning(|_| {
            Ok(vec![NewsHeadline {
                title: "Big Story".to_string(),
                description: Some("details".to_string()),
                ..NewsHeadline::default()
            }])
        });

        let topics = TopicsService::new(Arc::new(news)).topics().await;
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "Big Story");
        assert_eq!(topics[0].category, "News");
        assert_eq!(topics[0].description, "details");
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_catalog() {
        let mut news = MockNewsProvider::new();
        news.expect_top_headlines()
            .returning(|_| Err(NewsError::NotConfigured));

        let topics = TopicsService::new(Arc::new(news)).topics().await;
        assert_eq!(topics, default_topics());
    }

    #[tokio::test]
    async fn empty_headlines_fall_back_to_catalog() {
        let mut news = MockNewsProvider::new();
        news.expect_top_headlines().returning(|_| Ok(Vec::new()));

        let topics = TopicsService::new(Arc::new(news)).topics().await;
        assert_eq!(topics, default_topics());
    }
}

//! Wire types for the NewsAPI response, confined to this crate.

use serde::Deserialize;

use micdrop_core::domain::NewsHeadline;

#[derive(Debug, Deserialize)]
pub(crate) struct HeadlinesResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Source {
    #[serde(default)]
    pub name: Option<String>,
}

/// Map articles with usable titles to domain headlines, keeping at most
/// `count`.
pub(crate) fn to_headlines(response: HeadlinesResponse, count: usize) -> Vec<NewsHeadline> {
    response
        .articles
        .into_iter()
        .filter_map(|article| {
            let title = article.title.filter(|t| !t.trim().is_empty())?;
            Some(NewsHeadline {
                title,
                description: article.description,
                url: article.url,
                source_name: article.source.and_then(|s| s.name),
            })
        })
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {
                "source": { "id": null, "name": "Example Times" },
                "title": "Big Story",
                "description": "details",
                "url": "https://example.com/big-story"
            },
            { "source": null, "title": "   ", "description": "untitled" },
            { "source": null, "title": "Second Story" }
        ]
    }"#;

    #[test]
    fn deserializes_newsapi_payload() {
        let response: HeadlinesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.articles.len(), 3);
    }

    #[test]
    fn blank_titles_are_dropped() {
        let response: HeadlinesResponse = serde_json::from_str(SAMPLE).unwrap();
        let headlines = to_headlines(response, 10);
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "Big Story");
        assert_eq!(headlines[0].source_name.as_deref(), Some("Example Times"));
        assert_eq!(headlines[1].title, "Second Story");
        assert!(headlines[1].description.is_none());
    }

    #[test]
    fn count_bounds_the_result() {
        let response: HeadlinesResponse = serde_json::from_str(SAMPLE).unwrap();
        let headlines = to_headlines(response, 1);
        assert_eq!(headlines.len(), 1);
    }
}

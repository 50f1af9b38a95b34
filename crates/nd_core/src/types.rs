use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Naive layouts accepted for `publishedAt`; these carry no offset and are read as local time.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A single news item as delivered by the retrieval layer.
///
/// Optional text fields stay `None` when absent; the `*_text` accessors
/// expose them as empty strings for text operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
}

impl Article {
    pub fn new(url: impl Into<String>, title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            source: ArticleSource {
                id: None,
                name: source.into(),
            },
            author: None,
            title: title.into(),
            description: None,
            url: url.into(),
            url_to_image: None,
            published_at: String::new(),
            content: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_image(mut self, url_to_image: impl Into<String>) -> Self {
        self.url_to_image = Some(url_to_image.into());
        self
    }

    pub fn published(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn author_text(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    pub fn image_url(&self) -> &str {
        self.url_to_image.as_deref().unwrap_or("")
    }

    /// Parsed `publishedAt`, or `None` when the raw value is not a recognised date-time.
    pub fn published_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }
}

/// Parses a publication timestamp the way the retrieval layer emits them.
///
/// RFC 3339 and RFC 2822 values keep their offset, naive date-times are local,
/// and a bare `YYYY-MM-DD` is UTC midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Result object returned by the news retrieval layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: usize,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewsResponse {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// Unwraps the article list, surfacing an `error` status as [`Error::Upstream`].
    pub fn into_articles(self) -> Result<Vec<Article>> {
        if self.is_error() {
            return Err(Error::Upstream {
                code: self.code.unwrap_or_else(|| "unknown".to_string()),
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self.articles)
    }
}

//! Chart-ready aggregates handed to the rendering layer.
//!
//! Field names on the Rust side describe the data; the serialized names follow
//! what the chart components consume (`value`/`fill`, `text`).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Emission order for sentiment buckets.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSlice {
    pub name: String,
    #[serde(rename = "value")]
    pub count: usize,
    #[serde(rename = "fill")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBucket {
    #[serde(rename = "sentiment")]
    pub label: Sentiment,
    pub count: usize,
    #[serde(rename = "fill")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBucket {
    #[serde(rename = "category")]
    pub label: String,
    pub count: usize,
    #[serde(rename = "fill")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    #[serde(rename = "text")]
    pub token: String,
    #[serde(rename = "value")]
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub source_data: Vec<SourceSlice>,
    pub sentiment_data: Vec<SentimentBucket>,
    pub category_data: Vec<CategoryBucket>,
    pub keyword_data: Vec<KeywordCount>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.source_data.is_empty()
            && self.sentiment_data.is_empty()
            && self.category_data.is_empty()
            && self.keyword_data.is_empty()
    }
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_articles: usize,
    pub sources: usize,
    pub categories: usize,
}

//! Chart analytics over a collection of news articles.
//!
//! Every function here is a pure transform of its input; nothing is cached
//! between calls.

use nd_core::{Article, ChartData};
use tracing::debug;

pub mod category;
pub mod config;
pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod sources;
pub mod stats;
pub mod text;

pub use category::{category_breakdown, classify_category};
pub use config::AnalyticsConfig;
pub use keywords::top_keywords;
pub use lexicon::{CATEGORY_TABLE, NEGATIVE_WORDS, PALETTE, POSITIVE_WORDS, STOP_WORDS};
pub use sentiment::{classify_sentiment, sentiment_breakdown};
pub use sources::source_distribution;
pub use stats::dashboard_stats;

/// Builds the full chart bundle with the dashboard's default limits and palette.
pub fn analyze(articles: &[Article]) -> ChartData {
    analyze_with(articles, &AnalyticsConfig::default())
}

#[tracing::instrument(skip_all, fields(articles = articles.len()))]
pub fn analyze_with(articles: &[Article], config: &AnalyticsConfig) -> ChartData {
    let chart = ChartData {
        source_data: source_distribution(articles, config),
        sentiment_data: sentiment_breakdown(articles),
        category_data: category_breakdown(articles, config),
        keyword_data: top_keywords(articles, config.top_keywords),
    };
    debug!(
        sources = chart.source_data.len(),
        categories = chart.category_data.len(),
        keywords = chart.keyword_data.len(),
        "chart data ready"
    );
    chart
}

pub mod prelude {
    pub use super::{analyze, analyze_with, dashboard_stats, AnalyticsConfig};
    pub use nd_core::{Article, ChartData, DashboardStats};
}

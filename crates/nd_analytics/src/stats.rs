use std::collections::HashSet;

use nd_core::{Article, ChartData, DashboardStats};

pub fn dashboard_stats(articles: &[Article], chart: &ChartData) -> DashboardStats {
    let sources: HashSet<&str> = articles.iter().map(Article::source_name).collect();
    DashboardStats {
        total_articles: articles.len(),
        sources: sources.len(),
        categories: chart.category_data.len(),
    }
}

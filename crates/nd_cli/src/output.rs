use std::fmt;

use nd_core::{ActiveFilter, Article, ChartData, DashboardStats, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReport<'a> {
    pub stats: DashboardStats,
    pub active_filters: Vec<String>,
    #[serde(flatten)]
    pub chart: &'a ChartData,
}

#[derive(Debug, Serialize)]
pub struct FacetsReport {
    pub sources: Vec<String>,
    pub authors: Vec<String>,
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn filter_labels(active: &[ActiveFilter]) -> Vec<String> {
    active.iter().map(ToString::to_string).collect()
}

/// Plain-text article list, headed by how many of the loaded articles are shown.
pub struct ArticleListing<'a> {
    pub articles: &'a [Article],
    pub total: usize,
}

impl fmt::Display for ArticleListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Showing {} of {} articles", self.articles.len(), self.total)?;
        for article in self.articles {
            match article.published_time() {
                Some(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M"))?,
                None => f.write_str("----------------")?,
            }
            writeln!(f, "  [{}] {}", article.source_name(), article.title)?;
            if !article.author_text().is_empty() {
                writeln!(f, "    by {}", article.author_text())?;
            }
            writeln!(f, "    {}", article.url)?;
        }
        Ok(())
    }
}

pub struct ChartSummary<'a> {
    pub chart: &'a ChartData,
    pub stats: &'a DashboardStats,
    pub active: &'a [ActiveFilter],
}

fn row(f: &mut fmt::Formatter<'_>, label: &dyn fmt::Display, count: usize) -> fmt::Result {
    writeln!(f, "  {:<28} {:>4}", label, count)
}

impl fmt::Display for ChartSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        writeln!(
            f,
            "{} articles, {} sources, {} categories",
            stats.total_articles, stats.sources, stats.categories
        )?;
        if !self.active.is_empty() {
            writeln!(f, "Filters: {}", filter_labels(self.active).join(", "))?;
        }

        writeln!(f, "\nSources")?;
        for slice in &self.chart.source_data {
            row(f, &slice.name, slice.count)?;
        }

        writeln!(f, "\nSentiment")?;
        for bucket in &self.chart.sentiment_data {
            row(f, &bucket.label, bucket.count)?;
        }

        writeln!(f, "\nCategories")?;
        for bucket in &self.chart.category_data {
            row(f, &bucket.label, bucket.count)?;
        }

        writeln!(f, "\nKeywords")?;
        for keyword in &self.chart.keyword_data {
            row(f, &keyword.token, keyword.count)?;
        }
        Ok(())
    }
}

impl fmt::Display for FacetsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sources ({})", self.sources.len())?;
        for source in &self.sources {
            writeln!(f, "  {}", source)?;
        }
        writeln!(f, "Authors ({})", self.authors.len())?;
        for author in &self.authors {
            writeln!(f, "  {}", author)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_analytics::{analyze, dashboard_stats};
    use nd_core::DateRange;

    fn sample() -> Vec<Article> {
        vec![
            Article::new("https://example.com/1", "Climate talks stall", "Reuters")
                .with_author("Ana Ruiz")
                .published("2024-06-14T08:00:00Z"),
            Article::new("https://example.com/2", "Match report", "BBC News").published("unknown"),
        ]
    }

    #[test]
    fn test_render_articles() {
        let articles = sample();
        let text = ArticleListing {
            articles: &articles,
            total: 5,
        }
        .to_string();
        assert!(text.starts_with("Showing 2 of 5 articles"));
        assert!(text.contains("2024-06-14 08:00  [Reuters] Climate talks stall"));
        assert!(text.contains("by Ana Ruiz"));
        assert!(text.contains("----------------  [BBC News] Match report"));
    }

    #[test]
    fn test_analyze_report_json() {
        let articles = sample();
        let chart = analyze(&articles);
        let report = AnalyzeReport {
            stats: dashboard_stats(&articles, &chart),
            active_filters: filter_labels(&[ActiveFilter::Date(DateRange::Week)]),
            chart: &chart,
        };

        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["stats"]["totalArticles"], 2);
        assert_eq!(value["activeFilters"][0], "Date: week");
        assert!(value["sourceData"].is_array());
    }

    #[test]
    fn test_render_chart_lists_filters() {
        let articles = sample();
        let chart = analyze(&articles);
        let stats = dashboard_stats(&articles, &chart);
        let text = ChartSummary {
            chart: &chart,
            stats: &stats,
            active: &[ActiveFilter::HasImage],
        }
        .to_string();
        assert!(text.starts_with("2 articles, 2 sources"));
        assert!(text.contains("Filters: Has Image"));
        assert!(text.contains("Reuters"));
        assert!(text.contains("\nSentiment\n"));
    }

    #[test]
    fn test_render_facets() {
        let report = FacetsReport {
            sources: vec!["AP".to_string(), "Reuters".to_string()],
            authors: Vec::new(),
        };
        assert_eq!(report.to_string(), "Sources (2)\n  AP\n  Reuters\nAuthors (0)\n");
    }
}

use nd_core::{Article, SourceSlice};
use tracing::debug;

use crate::config::AnalyticsConfig;

/// Article counts per source name in first-seen order.
pub fn count_by_source(articles: &[Article]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for article in articles {
        let name = article.source_name();
        match counts.iter_mut().find(|(seen, _)| seen == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts
}

/// The busiest sources, highest count first; equal counts keep first-seen order.
#[tracing::instrument(skip_all, fields(articles = articles.len()))]
pub fn source_distribution(articles: &[Article], config: &AnalyticsConfig) -> Vec<SourceSlice> {
    let mut counts = count_by_source(articles);
    debug!("{} distinct sources", counts.len());

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(config.top_sources)
        .enumerate()
        .map(|(idx, (name, count))| SourceSlice {
            name,
            count,
            color: config.color_at(idx),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PALETTE;

    fn from(source: &str, n: usize) -> Article {
        Article::new(format!("https://{}.example.com/{}", source, n), "Headline", source)
    }

    #[test]
    fn test_first_seen_tie_break() {
        let articles = vec![from("Reuters", 1), from("BBC", 2), from("AP", 3), from("BBC", 4), from("AP", 5)];
        let slices = source_distribution(&articles, &AnalyticsConfig::default());

        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        // BBC and AP tie on 2; BBC was seen first
        assert_eq!(names, vec!["BBC", "AP", "Reuters"]);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[2].count, 1);
    }

    #[test]
    fn test_top_eight_only() {
        let articles: Vec<Article> = (0..10).map(|i| from(&format!("Source{}", i), i)).collect();
        let slices = source_distribution(&articles, &AnalyticsConfig::default());

        assert_eq!(slices.len(), 8);
        assert_eq!(slices[0].name, "Source0");
        assert_eq!(slices[7].name, "Source7");
        assert!(slices.iter().map(|s| s.count).sum::<usize>() <= articles.len());
    }

    #[test]
    fn test_exact_name_key() {
        let articles = vec![from("BBC", 1), from("bbc", 2)];
        assert_eq!(count_by_source(&articles).len(), 2);
    }
}

use nd_core::{Article, CategoryBucket};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::lexicon::{CATEGORY_TABLE, OTHER_CATEGORY};

/// Index into [`CATEGORY_TABLE`] of the first matching rule; `None` means Other.
fn rule_index(article: &Article) -> Option<usize> {
    let text = format!("{} {}", article.title, article.description_text()).to_lowercase();
    CATEGORY_TABLE
        .iter()
        .position(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
}

/// First category in table order with a keyword occurring anywhere in title or description.
pub fn classify_category(article: &Article) -> &'static str {
    rule_index(article)
        .map(|idx| CATEGORY_TABLE[idx].0)
        .unwrap_or(OTHER_CATEGORY)
}

/// Per-category counts in table order (Other last), empty buckets left out.
#[tracing::instrument(skip_all, fields(articles = articles.len()))]
pub fn category_breakdown(articles: &[Article], config: &AnalyticsConfig) -> Vec<CategoryBucket> {
    let mut counts = vec![0usize; CATEGORY_TABLE.len() + 1];
    for article in articles {
        let slot = rule_index(article).unwrap_or(CATEGORY_TABLE.len());
        counts[slot] += 1;
    }

    let labels = CATEGORY_TABLE
        .iter()
        .map(|(label, _)| *label)
        .chain(std::iter::once(OTHER_CATEGORY));

    let buckets: Vec<CategoryBucket> = labels
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .enumerate()
        .map(|(idx, (label, count))| CategoryBucket {
            label: label.to_string(),
            count,
            color: config.color_at(idx),
        })
        .collect();

    debug!("{} categories populated", buckets.len());
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PALETTE;

    fn article(title: &str, description: &str) -> Article {
        Article::new(format!("https://example.com/{}", title), title, "Wire").with_description(description)
    }

    #[test]
    fn test_technology_headline() {
        let a = article("New AI breakthrough in tech industry", "software innovation");
        assert_eq!(classify_category(&a), "Technology");
    }

    #[test]
    fn test_first_match_wins() {
        // "market" (Business) and "election" (Politics) both match; Business comes first
        let a = article("Election jitters hit the market", "");
        assert_eq!(classify_category(&a), "Business");
    }

    #[test]
    fn test_substring_match() {
        // "said" contains "ai", so the Technology rule fires
        assert_eq!(classify_category(&article("Minister said no", "")), "Technology");
        assert_eq!(classify_category(&article("Hockey GAME tonight", "")), "Sports");
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(classify_category(&article("Local bakery opens", "")), OTHER_CATEGORY);
    }

    #[test]
    fn test_breakdown_order_and_colors() {
        let articles = vec![
            article("Local bakery opens", ""),
            article("Vaccine rollout expands", ""),
            article("Tech stocks", ""),
            article("Hospital funding", ""),
        ];
        let buckets = category_breakdown(&articles, &AnalyticsConfig::default());

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Technology", "Health", "Other"]);
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), articles.len());
        assert_eq!(buckets[0].color, PALETTE[0]);
        assert_eq!(buckets[2].color, PALETTE[2]);
    }
}

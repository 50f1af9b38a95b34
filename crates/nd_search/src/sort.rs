use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use nd_core::{Article, SortBy, SortOrder, SortSpec};
use tracing::debug;

use crate::collate::locale_compare;

/// Non-overlapping occurrences of `needle` in the lower-cased title.
pub fn relevance_score(article: &Article, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    article.title.to_lowercase().matches(needle).count()
}

/// Per-article value the comparator works on, computed once per sort.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SortKey<'a> {
    // unparsable timestamps are `None` and order before any real time
    Date(Option<DateTime<Utc>>),
    Source(&'a str),
    Relevance(usize),
}

impl<'a> SortKey<'a> {
    fn of(article: &'a Article, sort_by: SortBy, needle: Option<&str>) -> Self {
        match sort_by {
            SortBy::Date => SortKey::Date(article.published_time()),
            SortBy::Source => SortKey::Source(article.source_name()),
            SortBy::Relevance => SortKey::Relevance(needle.map_or(0, |n| relevance_score(article, n))),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Source(a), SortKey::Source(b)) => locale_compare(a, b),
            (SortKey::Relevance(a), SortKey::Relevance(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Returns a stably sorted copy of `articles`.
///
/// `keywords` is the active keyword filter text; relevance counts how often it
/// appears in each title and is flat when it is blank.
#[tracing::instrument(skip_all, fields(articles = articles.len(), sort_by = %sorting.sort_by, order = %sorting.sort_order))]
pub fn sort_articles(articles: &[Article], sorting: &SortSpec, keywords: &str) -> Vec<Article> {
    let needle = if keywords.trim().is_empty() {
        None
    } else {
        Some(keywords.to_lowercase())
    };

    let mut keyed: Vec<(SortKey<'_>, &Article)> = articles
        .iter()
        .map(|article| (SortKey::of(article, sorting.sort_by, needle.as_deref()), article))
        .collect();

    // `sort_by` is stable, and reversing an ordering keeps equal pairs equal
    keyed.sort_by(|(a, _), (b, _)| match sorting.sort_order {
        SortOrder::Asc => a.compare(b),
        SortOrder::Desc => a.compare(b).reverse(),
    });

    debug!("sorted {} articles", keyed.len());
    keyed.into_iter().map(|(_, article)| article.clone()).collect()
}

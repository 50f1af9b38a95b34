//! The dashboard's single search box: loose term matching, a date window and
//! a fixed sort direction per key.

use std::cmp::Ordering;

use chrono::{DateTime, Local};
use nd_core::{Article, DateRange, SortBy};
use tracing::debug;

use crate::collate::locale_compare;
use crate::filter::{date_cutoff, matches_terms, published_since, search_text};

/// Terms shorter than this many characters are ignored.
const MIN_TERM_CHARS: usize = 3;

pub fn quick_terms(term: &str) -> Vec<String> {
    term.to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

fn length_score(article: &Article) -> usize {
    article.title.chars().count() + article.description_text().chars().count()
}

fn compare(a: &Article, b: &Article, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Date => b.published_time().cmp(&a.published_time()),
        SortBy::Source => locale_compare(a.source_name(), b.source_name()),
        SortBy::Relevance => length_score(b).cmp(&length_score(a)),
    }
}

pub fn quick_search(articles: &[Article], term: &str, date_range: DateRange, sort_by: SortBy) -> Vec<Article> {
    quick_search_at(articles, term, date_range, sort_by, Local::now())
}

/// Filters by `term` and `date_range`, then sorts: newest first for date,
/// A-Z for source, longest title plus description first for relevance.
///
/// A term made only of short words leaves no search terms, and an empty term
/// list matches every article.
#[tracing::instrument(skip_all, fields(articles = articles.len(), sort_by = %sort_by))]
pub fn quick_search_at(
    articles: &[Article],
    term: &str,
    date_range: DateRange,
    sort_by: SortBy,
    now: DateTime<Local>,
) -> Vec<Article> {
    let terms = if term.trim().is_empty() { None } else { Some(quick_terms(term)) };
    let cutoff = date_cutoff(date_range, now);

    let mut found: Vec<Article> = articles
        .iter()
        .filter(|article| {
            terms
                .as_ref()
                .map_or(true, |terms| matches_terms(&search_text(article), terms))
        })
        .filter(|article| cutoff.map_or(true, |cutoff| published_since(article, cutoff)))
        .cloned()
        .collect();

    found.sort_by(|a, b| compare(a, b, sort_by));
    debug!("quick search kept {} of {} articles", found.len(), articles.len());
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn now() -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    fn sample() -> Vec<Article> {
        let now = now();
        vec![
            Article::new("https://example.com/1", "Solar farm approved", "Reuters")
                .with_description("Regulators sign off on a large project")
                .published((now - Duration::days(2)).to_rfc3339()),
            Article::new("https://example.com/2", "Wind power record", "BBC News")
                .published((now - Duration::hours(2)).to_rfc3339()),
            Article::new("https://example.com/3", "Grid upgrade", "AP")
                .with_description("Solar and wind feed in")
                .published((now - Duration::days(40)).to_rfc3339()),
        ]
    }

    fn urls(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.url.as_str()).collect()
    }

    #[test]
    fn test_short_terms_dropped() {
        assert_eq!(quick_terms("AI in solar"), vec!["solar"]);
    }

    #[test]
    fn test_only_short_terms_match_everything() {
        let found = quick_search_at(&sample(), "a of", DateRange::All, SortBy::Date, now());
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_term_and_date_window() {
        let found = quick_search_at(&sample(), "solar", DateRange::All, SortBy::Date, now());
        assert_eq!(urls(&found), vec!["https://example.com/1", "https://example.com/3"]);

        let found = quick_search_at(&sample(), "solar", DateRange::Week, SortBy::Date, now());
        assert_eq!(urls(&found), vec!["https://example.com/1"]);
    }

    #[test]
    fn test_fixed_sort_directions() {
        let by_date = quick_search_at(&sample(), "", DateRange::All, SortBy::Date, now());
        assert_eq!(
            urls(&by_date),
            vec!["https://example.com/2", "https://example.com/1", "https://example.com/3"]
        );

        let by_source = quick_search_at(&sample(), "", DateRange::All, SortBy::Source, now());
        assert_eq!(
            urls(&by_source),
            vec!["https://example.com/3", "https://example.com/2", "https://example.com/1"]
        );

        let by_length = quick_search_at(&sample(), "", DateRange::All, SortBy::Relevance, now());
        assert_eq!(
            urls(&by_length),
            vec!["https://example.com/1", "https://example.com/3", "https://example.com/2"]
        );
    }
}

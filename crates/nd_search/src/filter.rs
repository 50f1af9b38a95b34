use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use nd_core::{Article, DateRange, FilterCriteria};
use tracing::debug;

/// Lower-cased, whitespace-separated search terms.
pub fn search_terms(keywords: &str) -> Vec<String> {
    keywords
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Title, description and source name joined and lower-cased.
pub fn search_text(article: &Article) -> String {
    format!(
        "{} {} {}",
        article.title,
        article.description_text(),
        article.source_name()
    )
    .to_lowercase()
}

/// True when any term (or every term) occurs in `text`.
pub fn matches_terms(text: &str, terms: &[String]) -> bool {
    // the `all` arm is subsumed by `any` unless `terms` is empty
    terms.iter().any(|term| text.contains(term.as_str()))
        || terms.iter().all(|term| text.contains(term.as_str()))
}

/// Words in `text` counted by splitting on single spaces; an empty string counts as one.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Earliest publication time admitted by `range`, relative to `now`.
pub fn date_cutoff(range: DateRange, now: DateTime<Local>) -> Option<DateTime<Utc>> {
    match range {
        DateRange::All => None,
        DateRange::Today => {
            let midnight = now.date_naive().and_hms_opt(0, 0, 0)?;
            let local = Local
                .from_local_datetime(&midnight)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
            Some(local.unwrap_or_else(|| midnight.and_utc()))
        }
        DateRange::Week => Some((now - Duration::days(7)).with_timezone(&Utc)),
        DateRange::Month => Some((now - Duration::days(30)).with_timezone(&Utc)),
    }
}

pub fn published_since(article: &Article, cutoff: DateTime<Utc>) -> bool {
    article
        .published_time()
        .map_or(false, |published| published >= cutoff)
}

/// Applies `criteria` against the current local time.
pub fn filter_articles(articles: &[Article], criteria: &FilterCriteria) -> Vec<Article> {
    filter_articles_at(articles, criteria, Local::now())
}

/// Keeps the articles satisfying every constraint in `criteria`, in input order.
#[tracing::instrument(skip_all, fields(articles = articles.len()))]
pub fn filter_articles_at(
    articles: &[Article],
    criteria: &FilterCriteria,
    now: DateTime<Local>,
) -> Vec<Article> {
    let terms = criteria.active_keywords().map(search_terms);
    let author = criteria.active_author();
    let source = criteria.active_source();
    let cutoff = date_cutoff(criteria.date_range, now);

    let kept: Vec<Article> = articles
        .iter()
        .filter(|article| {
            terms
                .as_ref()
                .map_or(true, |terms| matches_terms(&search_text(article), terms))
        })
        .filter(|article| author.map_or(true, |author| article.author.as_deref() == Some(author)))
        .filter(|article| source.map_or(true, |source| article.source_name() == source))
        .filter(|article| cutoff.map_or(true, |cutoff| published_since(article, cutoff)))
        .filter(|article| !criteria.has_image || !article.image_url().is_empty())
        .filter(|article| {
            criteria.min_word_count == 0
                || word_count(article.description_text()) + word_count(article.content_text())
                    >= criteria.min_word_count
        })
        .cloned()
        .collect();

    debug!("kept {} of {} articles", kept.len(), articles.len());
    kept
}

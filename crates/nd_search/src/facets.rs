//! Picker values derived from a collection.

use std::collections::BTreeSet;

use nd_core::Article;

/// Distinct source names in code-point order.
pub fn source_names(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .map(|article| article.source_name().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty authors in code-point order.
pub fn authors(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .filter_map(|article| article.author.as_deref())
        .filter(|author| !author.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

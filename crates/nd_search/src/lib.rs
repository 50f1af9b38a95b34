//! Filtering and ordering of article collections.
//!
//! Inputs are borrowed and never modified; every operation returns a new
//! collection.

use nd_core::{Article, FilterCriteria, SortSpec};

pub mod collate;
pub mod facets;
pub mod filter;
pub mod quick;
pub mod sort;

pub use collate::locale_compare;
pub use facets::{authors, source_names};
pub use filter::{filter_articles, filter_articles_at};
pub use quick::{quick_search, quick_search_at};
pub use sort::sort_articles;

/// Filters with `criteria`, then orders the survivors by `sorting` using the criteria's keywords.
pub fn search(articles: &[Article], criteria: &FilterCriteria, sorting: &SortSpec) -> Vec<Article> {
    let filtered = filter_articles(articles, criteria);
    sort_articles(&filtered, sorting, &criteria.keywords)
}

pub mod prelude {
    pub use super::{filter_articles, search, sort_articles};
    pub use nd_core::{Article, DateRange, FilterCriteria, SortBy, SortOrder, SortSpec};
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            other => Err(Error::invalid_criteria(format!(
                "unknown date range '{}' (expected all, today, week or month)",
                other
            ))),
        }
    }
}

/// User constraints narrowing an article collection. Defaults impose nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub keywords: String,
    pub author: Option<String>,
    pub source: Option<String>,
    pub date_range: DateRange,
    pub has_image: bool,
    pub min_word_count: usize,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn has_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    pub fn min_word_count(mut self, min_word_count: usize) -> Self {
        self.min_word_count = min_word_count;
        self
    }

    /// Keyword text when it contains anything besides whitespace.
    pub fn active_keywords(&self) -> Option<&str> {
        if self.keywords.trim().is_empty() {
            None
        } else {
            Some(&self.keywords)
        }
    }

    pub fn active_author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    pub fn active_source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_filters().is_empty()
    }

    /// Constraints currently in effect, in filter application order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if let Some(keywords) = self.active_keywords() {
            active.push(ActiveFilter::Keywords(keywords.to_string()));
        }
        if let Some(author) = self.active_author() {
            active.push(ActiveFilter::Author(author.to_string()));
        }
        if let Some(source) = self.active_source() {
            active.push(ActiveFilter::Source(source.to_string()));
        }
        if self.date_range != DateRange::All {
            active.push(ActiveFilter::Date(self.date_range));
        }
        if self.has_image {
            active.push(ActiveFilter::HasImage);
        }
        if self.min_word_count > 0 {
            active.push(ActiveFilter::MinWords(self.min_word_count));
        }
        active
    }

    /// Copy of these criteria with one constraint lifted.
    pub fn without(&self, filter: &ActiveFilter) -> Self {
        let mut criteria = self.clone();
        match filter {
            ActiveFilter::Keywords(_) => criteria.keywords.clear(),
            ActiveFilter::Author(_) => criteria.author = None,
            ActiveFilter::Source(_) => criteria.source = None,
            ActiveFilter::Date(_) => criteria.date_range = DateRange::All,
            ActiveFilter::HasImage => criteria.has_image = false,
            ActiveFilter::MinWords(_) => criteria.min_word_count = 0,
        }
        criteria
    }
}

/// One constraint of a [`FilterCriteria`], displayed as a removable badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Keywords(String),
    Author(String),
    Source(String),
    Date(DateRange),
    HasImage,
    MinWords(usize),
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::Keywords(keywords) => write!(f, "Keywords: {}", keywords),
            ActiveFilter::Author(author) => write!(f, "Author: {}", author),
            ActiveFilter::Source(source) => write!(f, "Source: {}", source),
            ActiveFilter::Date(range) => write!(f, "Date: {}", range),
            ActiveFilter::HasImage => f.write_str("Has Image"),
            ActiveFilter::MinWords(n) => write!(f, "Min {} words", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Source,
    Relevance,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Date => "date",
            SortBy::Source => "source",
            SortBy::Relevance => "relevance",
        };
        f.write_str(name)
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortBy::Date),
            "source" => Ok(SortBy::Source),
            "relevance" => Ok(SortBy::Relevance),
            other => Err(Error::invalid_criteria(format!(
                "unknown sort key '{}' (expected date, source or relevance)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::invalid_criteria(format!(
                "unknown sort order '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortSpec {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl SortSpec {
    pub fn new(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self { sort_by, sort_order }
    }
}

pub mod chart;
pub mod criteria;
pub mod error;
pub mod types;

pub use chart::{
    CategoryBucket, ChartData, DashboardStats, KeywordCount, Sentiment, SentimentBucket, SourceSlice,
};
pub use criteria::{ActiveFilter, DateRange, FilterCriteria, SortBy, SortOrder, SortSpec};
pub use error::{Error, Result};
pub use types::{parse_timestamp, Article, ArticleSource, NewsResponse};

pub mod prelude {
    pub use crate::{Article, ChartData, Error, FilterCriteria, Result, SortSpec};
}

use crate::keywords::DEFAULT_KEYWORD_LIMIT;
use crate::lexicon::PALETTE;

pub const DEFAULT_SOURCE_LIMIT: usize = 8;

/// Limits and colors for the chart bundle. The default reproduces the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub top_sources: usize,
    pub top_keywords: usize,
    pub palette: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_sources: DEFAULT_SOURCE_LIMIT,
            top_keywords: DEFAULT_KEYWORD_LIMIT,
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AnalyticsConfig {
    /// Palette color for the bucket at `index`, wrapping around.
    pub fn color_at(&self, index: usize) -> String {
        if self.palette.is_empty() {
            return PALETTE[index % PALETTE.len()].to_string();
        }
        self.palette[index % self.palette.len()].clone()
    }
}

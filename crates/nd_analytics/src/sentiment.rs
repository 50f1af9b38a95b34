use nd_core::{Article, Sentiment, SentimentBucket};
use tracing::debug;

use crate::lexicon::{sentiment_color, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::text::sentiment_tokens;

/// Lexicon hit counts for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    pub fn of(article: &Article) -> Self {
        let text = format!("{} {}", article.title, article.description_text());
        sentiment_tokens(&text).fold(Self::default(), |mut score, token| {
            if POSITIVE_WORDS.contains(&token.as_str()) {
                score.positive += 1;
            }
            if NEGATIVE_WORDS.contains(&token.as_str()) {
                score.negative += 1;
            }
            score
        })
    }

    pub fn sentiment(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

pub fn classify_sentiment(article: &Article) -> Sentiment {
    SentimentScore::of(article).sentiment()
}

/// Per-sentiment article counts in Positive, Neutral, Negative order, empty buckets left out.
#[tracing::instrument(skip_all, fields(articles = articles.len()))]
pub fn sentiment_breakdown(articles: &[Article]) -> Vec<SentimentBucket> {
    let mut counts = [0usize; 3];
    for article in articles {
        let slot = match classify_sentiment(article) {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Negative => 2,
        };
        counts[slot] += 1;
    }
    debug!(positive = counts[0], neutral = counts[1], negative = counts[2], "sentiment counts");

    Sentiment::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| SentimentBucket {
            label: *label,
            count,
            color: sentiment_color(*label).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Article {
        Article::new(format!("https://example.com/{}", title), title, "Wire")
    }

    #[test]
    fn test_market_and_disaster_headlines() {
        let articles = vec![
            titled("Markets rally as economy improves"),
            titled("Disaster strikes amid crisis and war"),
        ];

        let buckets = sentiment_breakdown(&articles);
        let labels: Vec<Sentiment> = buckets.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec![Sentiment::Positive, Sentiment::Negative]);
        assert!(buckets.iter().all(|b| b.count == 1));
    }

    #[test]
    fn test_exact_match_only() {
        // "winning" and "warfare" contain lexicon words but are not lexicon words
        assert_eq!(classify_sentiment(&titled("Winning warfare")), Sentiment::Neutral);
        // trailing punctuation defeats the exact match
        assert_eq!(classify_sentiment(&titled("Great!")), Sentiment::Neutral);
        assert_eq!(classify_sentiment(&titled("GREAT news")), Sentiment::Positive);
    }

    #[test]
    fn test_description_counts() {
        let article = titled("Quarterly report").with_description("profit growth but fraud concern and loss");
        let score = SentimentScore::of(&article);
        assert_eq!(score, SentimentScore { positive: 2, negative: 3 });
        assert_eq!(score.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(classify_sentiment(&titled("good and bad")), Sentiment::Neutral);
        assert_eq!(classify_sentiment(&titled("Weather update")), Sentiment::Neutral);
    }

    #[test]
    fn test_buckets_sum_to_input() {
        let articles = vec![titled("good"), titled("bad"), titled("plain"), titled("plain again")];
        let buckets = sentiment_breakdown(&articles);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), articles.len());
        assert_eq!(buckets[1].label, Sentiment::Neutral);
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn test_empty_input_yields_no_buckets() {
        assert!(sentiment_breakdown(&[]).is_empty());
    }
}

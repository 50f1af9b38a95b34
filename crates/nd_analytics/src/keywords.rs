use std::collections::HashMap;

use nd_core::{Article, KeywordCount};
use tracing::debug;

use crate::text::keyword_tokens;

pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

/// Most frequent keywords across titles and descriptions.
///
/// Counts are kept in first-occurrence order and sorted stably, so equal
/// counts rank by where the token first appeared in the joined text.
#[tracing::instrument(skip_all, fields(articles = articles.len()))]
pub fn top_keywords(articles: &[Article], limit: usize) -> Vec<KeywordCount> {
    let corpus = articles
        .iter()
        .flat_map(|article| [article.title.as_str(), article.description_text()])
        .collect::<Vec<_>>()
        .join(" ");

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in keyword_tokens(&corpus) {
        match positions.get(&token) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    debug!("{} distinct keywords", counts.len());

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(token, count)| KeywordCount { token, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str) -> Article {
        Article::new(format!("https://example.com/{}", title.len()), title, "Wire").with_description(description)
    }

    #[test]
    fn test_counts_title_and_description() {
        let articles = vec![
            article("Budget deadline looms", "Congress weighs budget"),
            article("Budget vote delayed", "Senate budget talks stall"),
        ];

        let keywords = top_keywords(&articles, DEFAULT_KEYWORD_LIMIT);
        assert_eq!(keywords[0], KeywordCount { token: "budget".to_string(), count: 4 });
        assert!(keywords.iter().all(|k| k.token.len() > 3));
        assert!(keywords.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let articles = vec![article("zebra apple mango", ""), article("mango apple zebra", "")];

        let tokens: Vec<String> = top_keywords(&articles, DEFAULT_KEYWORD_LIMIT)
            .into_iter()
            .map(|k| k.token)
            .collect();
        assert_eq!(tokens, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_limit_applies() {
        let title = (0..30).map(|i| format!("token{:02}", i)).collect::<Vec<_>>().join(" ");
        let keywords = top_keywords(&[article(&title, "")], DEFAULT_KEYWORD_LIMIT);
        assert_eq!(keywords.len(), 20);
        assert_eq!(keywords[0].token, "token00");
    }

    #[test]
    fn test_empty_input() {
        assert!(top_keywords(&[], DEFAULT_KEYWORD_LIMIT).is_empty());
    }
}

//! Tokenizers for the analytics engines.
//!
//! The keyword cloud and the sentiment classifier normalize text differently:
//! keyword tokens are cleaned, length-filtered and stop-word filtered, while
//! sentiment tokens are only lower-cased. Classification results depend on
//! that difference, so the two stay separate functions.

use crate::lexicon::is_stop_word;

/// Tokens at or below this length are dropped from the keyword stream.
pub const MIN_KEYWORD_LEN: usize = 3;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn clean_token(raw: &str) -> String {
    raw.to_lowercase().chars().filter(|c| is_word_char(*c)).collect()
}

/// Lower-cased keyword tokens of `text`, minus punctuation, short words and stop words.
///
/// Stripping only removes non-whitespace characters, so splitting first and
/// cleaning each piece yields the same tokens as cleaning the whole text.
pub fn keyword_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(clean_token)
        .filter(|token| token.len() > MIN_KEYWORD_LEN && !is_stop_word(token))
}

/// Lower-cased whitespace-separated words, punctuation and all.
pub fn sentiment_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tokens_cleanup() {
        let tokens: Vec<String> = keyword_tokens("Markets RALLY: the economy's outlook, improves!").collect();
        assert_eq!(tokens, vec!["markets", "rally", "economys", "outlook", "improves"]);
    }

    #[test]
    fn test_keyword_tokens_drop_short_and_stop_words() {
        let tokens: Vec<String> = keyword_tokens("The cat sat with them through winter").collect();
        assert_eq!(tokens, vec!["winter"]);
    }

    #[test]
    fn test_keyword_tokens_punctuation_only() {
        assert_eq!(keyword_tokens(" -- ... !!! ").count(), 0);
        assert_eq!(keyword_tokens("").count(), 0);
    }

    #[test]
    fn test_keyword_tokens_non_ascii_stripped() {
        let tokens: Vec<String> = keyword_tokens("Café économie naïve_test").collect();
        // "café" shrinks to "caf" and falls under the length cutoff
        assert_eq!(tokens, vec!["conomie", "nave_test"]);
    }

    #[test]
    fn test_sentiment_tokens_keep_punctuation() {
        let tokens: Vec<String> = sentiment_tokens("  Great win, BAD loss  ").collect();
        assert_eq!(tokens, vec!["great", "win,", "bad", "loss"]);
    }
}

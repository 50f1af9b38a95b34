//! Fixed word lists and colors that parameterize the analytics engines.

use std::collections::HashSet;

use lazy_static::lazy_static;
use nd_core::Sentiment;

/// Common English words that never make it into the keyword cloud.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "says", "said", "after", "new", "first", "last", "over",
    "more", "also", "just", "now", "than", "only", "other", "some", "time", "very", "when",
    "come", "during", "back", "general", "however", "out", "many", "from", "up", "about",
    "into", "through", "before", "under", "around", "among", "between", "while", "where", "why",
    "how", "what", "who", "which", "whose", "whom", "get", "got", "make", "made", "take", "took",
    "give", "gave", "go", "went", "see", "saw", "know", "knew", "think", "thought", "look",
    "looked", "use", "used", "find", "found", "work", "worked", "call", "called", "try", "tried",
    "ask", "asked", "need", "needed", "feel", "felt", "become", "became", "leave", "left", "put",
    "keep", "kept", "let", "begin", "began", "seem", "seemed", "help", "helped", "talk", "talked",
    "turn", "turned", "start", "started", "show", "showed", "hear", "heard", "play", "played",
    "run", "ran", "move", "moved", "live", "lived", "believe", "believed", "bring", "brought",
    "happen", "happened", "write", "wrote", "provide", "provided", "sit", "sat", "stand", "stood",
    "lose", "lost", "pay", "paid", "meet", "met", "include", "included", "continue", "continued",
    "set", "tell", "told",
];

lazy_static! {
    pub static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

/// Exact-match words that push an article towards [`Sentiment::Positive`].
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "success", "win",
    "victory", "achievement", "breakthrough", "progress", "improve", "improves", "better", "best",
    "positive", "optimistic", "hope", "celebrate", "joy", "happy", "pleased", "excited",
    "thrilled", "proud", "love", "like", "enjoy", "benefit", "gain", "profit", "growth",
    "increase", "rise", "rally", "surge", "boost", "advance", "forward",
];

/// Exact-match words that push an article towards [`Sentiment::Negative`].
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disaster", "crisis", "problem", "issue", "concern",
    "worry", "fear", "danger", "risk", "threat", "attack", "violence", "war", "conflict", "fight",
    "death", "kill", "murder", "crime", "steal", "fraud", "corruption", "scandal", "controversy",
    "decline", "fall", "drop", "decrease", "loss", "fail", "failure", "reject", "deny", "oppose",
    "against", "protest", "angry", "mad", "upset", "sad", "disappointed", "frustrated", "hate",
];

/// Category label paired with the substrings that select it.
pub type CategoryRule = (&'static str, &'static [&'static str]);

/// Categories in evaluation order; the first rule with a matching keyword wins.
pub const CATEGORY_TABLE: &[CategoryRule] = &[
    (
        "Technology",
        &["tech", "ai", "artificial intelligence", "software", "digital", "cyber", "innovation"],
    ),
    (
        "Business",
        &["business", "economy", "market", "finance", "company", "corporate", "trade"],
    ),
    (
        "Health",
        &["health", "medical", "hospital", "doctor", "medicine", "covid", "vaccine"],
    ),
    (
        "Politics",
        &["politics", "government", "election", "policy", "congress", "senate", "president"],
    ),
    (
        "Sports",
        &["sports", "football", "basketball", "soccer", "olympics", "game", "team"],
    ),
    (
        "Entertainment",
        &["entertainment", "movie", "music", "celebrity", "film", "show", "actor"],
    ),
    (
        "Science",
        &["science", "research", "study", "discovery", "climate", "space", "environment"],
    ),
];

pub const OTHER_CATEGORY: &str = "Other";

/// Chart palette, indexed by bucket position and repeated when exhausted.
pub const PALETTE: [&str; 8] = [
    "hsl(45, 93%, 47%)",
    "hsl(35, 91%, 62%)",
    "hsl(25, 95%, 53%)",
    "hsl(55, 84%, 51%)",
    "hsl(15, 86%, 59%)",
    "hsl(65, 77%, 45%)",
    "hsl(40, 89%, 43%)",
    "hsl(30, 87%, 55%)",
];

pub fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "hsl(120, 70%, 50%)",
        Sentiment::Neutral => "hsl(45, 93%, 47%)",
        Sentiment::Negative => "hsl(0, 70%, 50%)",
    }
}

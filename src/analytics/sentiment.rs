//! Keyword-based emotional analysis.
//!
//! Sentiment here is a fixed-list heuristic, not NLP: a message scores one
//! positive point per positive keyword it contains and one negative point
//! per negative keyword, using substring containment on the lowercased
//! content. The word-cloud categorizer reuses the same lists but matches
//! whole tokens exactly. The two matching modes are intentionally
//! different and must stay that way (substring scoring can over-count,
//! e.g. "love" inside an unrelated longer token).
//!
//! Keyword lists mix French and English terms plus a handful of emoji.

use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;

/// Positive sentiment keywords (French/English + emoji).
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "amour",
    "love",
    "adorable",
    "magnifique",
    "merveilleux",
    "génial",
    "super",
    "parfait",
    "excellent",
    "fantastique",
    "incroyable",
    "formidable",
    "heureux",
    "joie",
    "sourire",
    "rire",
    "bisou",
    "câlin",
    "chéri",
    "bébé",
    "coeur",
    "❤️",
    "💕",
    "💖",
    "😘",
    "😍",
    "🥰",
];

/// Negative sentiment keywords (French/English + emoji).
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "triste",
    "sad",
    "horrible",
    "nul",
    "terrible",
    "affreux",
    "déprimé",
    "énervé",
    "colère",
    "furieux",
    "déteste",
    "hate",
    "ennuyeux",
    "fatigue",
    "stress",
    "problème",
    "inquiet",
    "peur",
    "angoisse",
    "😢",
    "😭",
    "😠",
    "😡",
    "😞",
    "😔",
    "😰",
];

/// Subset of the positive list counted separately as affection words.
const AFFECTION_KEYWORDS: &[&str] = &["amour", "love", "chéri", "bébé", "coeur"];

/// Sentiment bucket assigned to a word-cloud token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    /// Token is on the positive keyword list
    Positive,
    /// Token is on the negative keyword list
    Negative,
    /// Token is on neither list
    Neutral,
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "positive"),
            SentimentCategory::Negative => write!(f, "negative"),
            SentimentCategory::Neutral => write!(f, "neutral"),
        }
    }
}

/// Categorizes a lowercased token by exact keyword-list membership.
///
/// This is the word-cloud matching mode: exact token equality, not the
/// substring containment used by [`analyze_emotions`].
pub fn categorize(word: &str) -> SentimentCategory {
    if POSITIVE_KEYWORDS.contains(&word) {
        SentimentCategory::Positive
    } else if NEGATIVE_KEYWORDS.contains(&word) {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

/// Aggregate emotional metrics over a set of conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmotionalMetrics {
    /// Number of positive keyword hits.
    pub positive_score: usize,

    /// Number of negative keyword hits.
    pub negative_score: usize,

    /// `round(((positive - negative) / total_messages) * 100)`, clamped to
    /// [-100, 100]. Zero when there are no messages.
    pub mood_score: i32,

    /// Number of emoji code points across all messages.
    pub total_emojis: usize,

    /// Number of affection-keyword hits.
    pub affection_words: usize,
}

/// Scores every message of the given conversations once.
///
/// Each keyword contributes at most one hit per message (containment, not
/// occurrence counting). Emoji are counted per code point against a fixed
/// set of Unicode ranges.
pub fn analyze_emotions(conversations: &[Conversation]) -> EmotionalMetrics {
    let mut positive_score = 0usize;
    let mut negative_score = 0usize;
    let mut total_emojis = 0usize;
    let mut affection_words = 0usize;
    let mut total_messages = 0usize;

    for conv in conversations {
        for msg in &conv.messages {
            total_messages += 1;
            let content = msg.content.to_lowercase();

            total_emojis += content.chars().filter(|&c| is_emoji(c)).count();

            for keyword in POSITIVE_KEYWORDS {
                if content.contains(keyword) {
                    positive_score += 1;
                    if AFFECTION_KEYWORDS.contains(keyword) {
                        affection_words += 1;
                    }
                }
            }

            for keyword in NEGATIVE_KEYWORDS {
                if content.contains(keyword) {
                    negative_score += 1;
                }
            }
        }
    }

    EmotionalMetrics {
        positive_score,
        negative_score,
        mood_score: mood_score(positive_score, negative_score, total_messages),
        total_emojis,
        affection_words,
    }
}

/// Net keyword score for one lowercased message: +1 per positive keyword
/// present, -1 per negative. Used by the per-participant rollup.
pub(crate) fn keyword_delta(content: &str) -> i64 {
    let mut delta = 0i64;
    for keyword in POSITIVE_KEYWORDS {
        if content.contains(keyword) {
            delta += 1;
        }
    }
    for keyword in NEGATIVE_KEYWORDS {
        if content.contains(keyword) {
            delta -= 1;
        }
    }
    delta
}

/// Bounded mood score; zero when there are no messages.
fn mood_score(positive: usize, negative: usize, total_messages: usize) -> i32 {
    if total_messages == 0 {
        return 0;
    }
    let raw = ((positive as f64 - negative as f64) / total_messages as f64 * 100.0).round() as i32;
    raw.clamp(-100, 100)
}

/// Returns `true` for code points in the counted emoji ranges: emoticons,
/// symbols and pictographs, transport, flags, miscellaneous symbols and
/// dingbats.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F600}'..='\u{1F64F}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F1E0}'..='\u{1F1FF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}

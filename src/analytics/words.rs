//! Word frequency tables for word clouds.
//!
//! Tokenization is deliberately blunt: lowercase, turn every non-word
//! character into whitespace, split. Tokens of length two or less and
//! tokens on the stop-word list (French + English function words) are
//! discarded before counting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;

use super::sentiment::{self, SentimentCategory};

/// Default number of entries returned by [`generate_word_cloud`].
pub const DEFAULT_WORD_CLOUD_LIMIT: usize = 50;

/// French and English function words excluded from word clouds.
pub const STOP_WORDS: &[&str] = &[
    "le", "de", "et", "à", "un", "il", "être", "et", "en", "avoir", "que", "pour", "dans", "ce",
    "son", "une", "sur", "avec", "ne", "se", "pas", "tout", "plus", "par", "grand", "celui", "me",
    "te", "si", "la", "du", "des", "les", "mais", "ou", "où", "donc", "car", "ni", "or", "je",
    "tu", "nous", "vous", "ils", "elles", "mon", "ton", "son", "ma", "ta", "sa", "mes", "tes",
    "ses", "notre", "votre", "leur", "this", "that", "the", "and", "or", "but", "in", "on", "at",
    "to", "for", "of", "with", "by", "is", "are", "was", "were", "be", "been", "have", "has",
    "had", "do", "does", "did", "will", "would", "could", "should",
];

/// One word-cloud entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Lowercased token.
    pub word: String,

    /// Occurrences across all messages of all given conversations.
    pub count: usize,

    /// Keyword-list membership of the token (exact match).
    pub category: SentimentCategory,
}

/// Builds a word frequency table over all messages of the given
/// conversations.
///
/// Entries are sorted by count descending; equal counts order
/// alphabetically so the result is deterministic. At most `limit` entries
/// are returned ([`DEFAULT_WORD_CLOUD_LIMIT`] is the conventional value).
pub fn generate_word_cloud(conversations: &[Conversation], limit: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for conv in conversations {
        for msg in &conv.messages {
            for word in tokenize(&msg.content) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);

    entries
        .into_iter()
        .map(|(word, count)| WordFrequency {
            category: sentiment::categorize(&word),
            word,
            count,
        })
        .collect()
}

/// Splits message content into countable tokens.
///
/// Word characters are Unicode alphanumerics plus underscore, so accented
/// French tokens survive intact. Everything else becomes a separator.
fn tokenize(content: &str) -> Vec<String> {
    let stripped: String = content
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    stripped
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .map(String::from)
        .collect()
}

//! Per-participant activity rollups.
//!
//! Attributes every message to its sender and derives, per sender: message
//! and word counts, rounded average words per message, a net emotional
//! score (same substring keyword matching as the mood metrics), and the
//! most active hour of day.

use std::collections::HashMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;

use super::sentiment;

/// Activity summary for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantActivity {
    /// Messages sent.
    pub messages: usize,

    /// Whitespace-token word count across those messages.
    pub words: usize,

    /// `round(words / messages)`.
    pub avg_words_per_message: usize,

    /// Net substring-keyword score: +1 per positive keyword present in a
    /// message, -1 per negative keyword, summed over all messages.
    pub emotional_score: i64,

    /// Hour of day (0-23) with the most messages. Ties resolve to the
    /// lowest hour.
    pub most_active_hour: u32,
}

#[derive(Default)]
struct Accumulator {
    messages: usize,
    words: usize,
    emotional_score: i64,
    hours: [usize; 24],
}

/// Rolls up activity per sender over all messages of the given
/// conversations.
///
/// The hourly histogram behind `most_active_hour` spans every conversation
/// in the input, so a sender active in several conversations is judged on
/// their combined rhythm.
pub fn participant_activity(
    conversations: &[Conversation],
) -> HashMap<String, ParticipantActivity> {
    let mut accumulators: HashMap<String, Accumulator> = HashMap::new();

    for conv in conversations {
        for msg in &conv.messages {
            let acc = accumulators.entry(msg.sender.clone()).or_default();
            acc.messages += 1;
            acc.words += msg.word_count();
            acc.hours[msg.timestamp.hour() as usize] += 1;
            acc.emotional_score += sentiment::keyword_delta(&msg.content.to_lowercase());
        }
    }

    accumulators
        .into_iter()
        .map(|(sender, acc)| {
            let avg_words_per_message =
                (acc.words as f64 / acc.messages as f64).round() as usize;

            // Ascending scan, strict greater-than: first maximum wins
            let mut most_active_hour = 0usize;
            for (hour, &count) in acc.hours.iter().enumerate() {
                if count > acc.hours[most_active_hour] {
                    most_active_hour = hour;
                }
            }

            (
                sender,
                ParticipantActivity {
                    messages: acc.messages,
                    words: acc.words,
                    avg_words_per_message,
                    emotional_score: acc.emotional_score,
                    most_active_hour: most_active_hour as u32,
                },
            )
        })
        .collect()
}

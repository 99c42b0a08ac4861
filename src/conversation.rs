//! Conversation aggregate and derived statistics.
//!
//! A [`Conversation`] is the unit the parser hands to callers: the messages
//! recovered from one file (or one multi-format section), chronologically
//! sorted, with the derived fields the rest of the crate relies on already
//! computed. [`ConversationStats`] is the on-demand per-participant rollup.
//!
//! # Example
//!
//! ```
//! use chatlens::conversation::Conversation;
//! use chatlens::message::Message;
//! use chatlens::platform::Platform;
//! use chrono::NaiveDate;
//!
//! let ts = |m| {
//!     NaiveDate::from_ymd_opt(2025, 5, 15)
//!         .unwrap()
//!         .and_hms_opt(9, m, 0)
//!         .unwrap()
//! };
//! let messages = vec![
//!     Message::text("whatsapp-1", ts(41), "Bob", "Hi Alice!"),
//!     Message::text("whatsapp-0", ts(40), "Alice", "Hello there"),
//! ];
//!
//! let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);
//! assert_eq!(conv.name, "chat");
//! assert_eq!(conv.message_count, 2);
//! assert_eq!(conv.participants, vec!["Alice", "Bob"]);
//! assert_eq!(conv.word_count, 4);
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::platform::Platform;

/// A parsed conversation with its derived fields.
///
/// # Invariants
///
/// - `messages` is sorted ascending by timestamp (stable: equal timestamps
///   keep their parse order)
/// - `message_count == messages.len()`
/// - `word_count` is the sum of per-message whitespace-token counts
/// - `participants` holds unique senders in order of first appearance in
///   the sorted sequence
/// - `start_date <= end_date` whenever `message_count > 0`; with zero
///   messages both default to the build-time clock
///
/// Parsing never mutates an existing conversation; each parse produces
/// fresh values. The only field callers are expected to write after the
/// fact is `custom_name` (user-assigned rename).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Identifier derived from the source file name, extension stripped.
    pub id: String,

    /// Display name derived from the file name or section header.
    pub name: String,

    /// Source platform tag.
    pub platform: Platform,

    /// Messages in chronological order.
    pub messages: Vec<Message>,

    /// Number of messages.
    pub message_count: usize,

    /// Total whitespace-token count across all messages.
    pub word_count: usize,

    /// Unique senders, in order of first appearance.
    pub participants: Vec<String>,

    /// Timestamp of the earliest message.
    pub start_date: NaiveDateTime,

    /// Timestamp of the latest message.
    pub end_date: NaiveDateTime,

    /// User-assigned name; overrides `name` wherever one is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub custom_name: Option<String>,
}

impl Conversation {
    /// Builds a conversation from unordered parsed messages.
    ///
    /// Sorts messages ascending by timestamp (stable sort, so ties keep
    /// their original relative order), then derives participant order, word
    /// count and date bounds from the sorted sequence.
    ///
    /// Zero messages still yield a valid conversation: derived counts are
    /// zero, the participant list is empty, and both date bounds default to
    /// the current local time.
    pub fn build(mut messages: Vec<Message>, source_name: &str, platform: Platform) -> Self {
        let name = stem(source_name).to_string();
        let id = name.clone();

        if messages.is_empty() {
            let now = Local::now().naive_local();
            return Self {
                id,
                name,
                platform,
                messages: Vec::new(),
                message_count: 0,
                word_count: 0,
                participants: Vec::new(),
                start_date: now,
                end_date: now,
                custom_name: None,
            };
        }

        messages.sort_by_key(|m| m.timestamp);

        let mut participants: Vec<String> = Vec::new();
        for msg in &messages {
            if !participants.iter().any(|p| p == &msg.sender) {
                participants.push(msg.sender.clone());
            }
        }

        let word_count = messages.iter().map(Message::word_count).sum();
        let start_date = messages[0].timestamp;
        let end_date = messages[messages.len() - 1].timestamp;
        let message_count = messages.len();

        Self {
            id,
            name,
            platform,
            messages,
            message_count,
            word_count,
            participants,
            start_date,
            end_date,
            custom_name: None,
        }
    }

    /// Builder method to set the user-assigned name.
    #[must_use]
    pub fn with_custom_name(mut self, custom_name: impl Into<String>) -> Self {
        self.custom_name = Some(custom_name.into());
        self
    }

    /// Returns the name to show: the custom name when set, otherwise the
    /// derived display name.
    pub fn display_name(&self) -> &str {
        self.custom_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns `true` if this conversation holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Strips the extension from a file or section name.
fn stem(source_name: &str) -> &str {
    Path::new(source_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source_name)
}

/// Per-participant rollup for one conversation.
///
/// Recomputed on demand from a [`Conversation`]; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStats {
    /// Total messages in the conversation.
    pub total_messages: usize,

    /// Total whitespace-token count.
    pub total_words: usize,

    /// Participants in first-appearance order.
    pub participants: Vec<String>,

    /// Message count per sender.
    pub messages_by_participant: HashMap<String, usize>,

    /// Word count per sender.
    pub words_by_participant: HashMap<String, usize>,
}

impl ConversationStats {
    /// Computes the rollup for one conversation.
    pub fn for_conversation(conversation: &Conversation) -> Self {
        let mut messages_by_participant: HashMap<String, usize> = HashMap::new();
        let mut words_by_participant: HashMap<String, usize> = HashMap::new();

        for msg in &conversation.messages {
            *messages_by_participant
                .entry(msg.sender.clone())
                .or_insert(0) += 1;
            *words_by_participant.entry(msg.sender.clone()).or_insert(0) += msg.word_count();
        }

        Self {
            total_messages: conversation.message_count,
            total_words: conversation.word_count,
            participants: conversation.participants.clone(),
            messages_by_participant,
            words_by_participant,
        }
    }
}

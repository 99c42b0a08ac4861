//! Serializable boundary records for persisted conversations.
//!
//! Persistence collaborators (browser local storage in the original
//! deployment, plain files elsewhere) store conversations as text with
//! ISO-8601 string dates. The in-memory [`Conversation`] entity carries
//! resolved timestamps instead, so the boundary needs an explicit wire
//! type and a total conversion in each direction:
//!
//! - encoding ([`ConversationRecord::from`]) cannot fail
//! - restoring ([`ConversationRecord::restore`]) never panics or errors;
//!   a record whose dates cannot be reconstructed is quarantined by
//!   [`restore_all`] rather than crashing the load
//!
//! # Example
//!
//! ```
//! use chatlens::parse::parse_file;
//! use chatlens::storage::{ConversationRecord, restore_all};
//!
//! let content = "[WhatsApp]\n[15/05/2025, 09:40] Alice : Hello there\n";
//! let conversations = parse_file(content, "chat.txt");
//!
//! let records: Vec<ConversationRecord> =
//!     conversations.iter().map(ConversationRecord::from).collect();
//!
//! let (restored, quarantined) = restore_all(records);
//! assert_eq!(restored, conversations);
//! assert!(quarantined.is_empty());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;
use crate::message::{Message, MessageKind};
use crate::platform::Platform;

/// Timestamp layout written by the encoder.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted timestamp layouts when restoring. Stored data may come from
/// other writers (notably JavaScript's `toISOString`, which appends
/// fractional seconds and a `Z`), so restore is more lenient than encode.
const RESTORE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses a stored ISO-8601 timestamp, trying each accepted layout.
pub fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    for format in RESTORE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }
    None
}

/// Wire form of a [`Message`]: identical fields, string timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub timestamp: String,
    pub sender: String,
    pub content: String,
    pub kind: MessageKind,
}

impl From<&Message> for MessageRecord {
    fn from(msg: &Message) -> Self {
        Self {
            id: msg.id.clone(),
            timestamp: msg.timestamp.format(ISO_FORMAT).to_string(),
            sender: msg.sender.clone(),
            content: msg.content.clone(),
            kind: msg.kind,
        }
    }
}

impl MessageRecord {
    /// Rebuilds the in-memory message; `None` if the stored timestamp does
    /// not reconstruct.
    pub fn restore(&self) -> Option<Message> {
        Some(Message {
            id: self.id.clone(),
            timestamp: parse_iso_datetime(&self.timestamp)?,
            sender: self.sender.clone(),
            content: self.content.clone(),
            kind: self.kind,
        })
    }
}

/// Wire form of a [`Conversation`]: identical fields, string dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub messages: Vec<MessageRecord>,
    pub message_count: usize,
    pub word_count: usize,
    pub participants: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub custom_name: Option<String>,
}

impl From<&Conversation> for ConversationRecord {
    fn from(conv: &Conversation) -> Self {
        Self {
            id: conv.id.clone(),
            name: conv.name.clone(),
            platform: conv.platform,
            messages: conv.messages.iter().map(MessageRecord::from).collect(),
            message_count: conv.message_count,
            word_count: conv.word_count,
            participants: conv.participants.clone(),
            start_date: conv.start_date.format(ISO_FORMAT).to_string(),
            end_date: conv.end_date.format(ISO_FORMAT).to_string(),
            custom_name: conv.custom_name.clone(),
        }
    }
}

impl ConversationRecord {
    /// Rebuilds the in-memory conversation.
    ///
    /// Returns `None` when the record's own dates or any message timestamp
    /// fail reconstruction. The record as a whole is then treated as
    /// corrupt and left to the caller to quarantine. Never panics.
    pub fn restore(&self) -> Option<Conversation> {
        let start_date = parse_iso_datetime(&self.start_date)?;
        let end_date = parse_iso_datetime(&self.end_date)?;

        let mut messages = Vec::with_capacity(self.messages.len());
        for record in &self.messages {
            messages.push(record.restore()?);
        }

        Some(Conversation {
            id: self.id.clone(),
            name: self.name.clone(),
            platform: self.platform,
            messages,
            message_count: self.message_count,
            word_count: self.word_count,
            participants: self.participants.clone(),
            start_date,
            end_date,
            custom_name: self.custom_name.clone(),
        })
    }
}

/// Restores a batch of stored records.
///
/// Returns the successfully restored conversations and, separately, the
/// records that failed date reconstruction, quarantined for the caller to
/// report or discard instead of crashing the load.
pub fn restore_all(
    records: Vec<ConversationRecord>,
) -> (Vec<Conversation>, Vec<ConversationRecord>) {
    let mut restored = Vec::with_capacity(records.len());
    let mut quarantined = Vec::new();

    for record in records {
        match record.restore() {
            Some(conversation) => restored.push(conversation),
            None => quarantined.push(record),
        }
    }

    (restored, quarantined)
}

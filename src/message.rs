//! Parsed message type.
//!
//! This module provides [`Message`], the structured form of a single
//! transcript line. The line parser produces one `Message` per line that
//! matches the bracketed-timestamp grammar; everything downstream
//! (conversation building, analytics) consumes this type.
//!
//! # Examples
//!
//! ```
//! use chatlens::message::{Message, MessageKind};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2025, 5, 15)
//!     .unwrap()
//!     .and_hms_opt(9, 40, 0)
//!     .unwrap();
//! let msg = Message::text("whatsapp-0", ts, "Alice", "Hello there");
//!
//! assert_eq!(msg.sender, "Alice");
//! assert_eq!(msg.kind, MessageKind::Text);
//! assert_eq!(msg.word_count(), 2);
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The kind of content a message carries.
///
/// The line grammar only ever produces [`Text`](MessageKind::Text); the
/// other variants exist for collaborators that tag media placeholders or
/// system notices after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary text message
    Text,
    /// Placeholder left by the exporter for an attachment
    Media,
    /// Platform-generated notice
    System,
}

/// A single parsed transcript message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `String` | Synthetic identifier, unique within a conversation |
/// | `timestamp` | `NaiveDateTime` | When the message was sent (minute precision, local wall-clock) |
/// | `sender` | `String` | Display name as written in the export; not a verified identity |
/// | `content` | `String` | Trimmed text body, never empty |
/// | `kind` | `MessageKind` | Content tag |
///
/// # Invariants
///
/// `content` is trimmed and non-empty: the parser drops lines whose body
/// trims to nothing rather than constructing an empty message. Identifiers
/// are derived from the platform tag and the line's position in the file,
/// so re-parsing identical input yields identical ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Synthetic identifier (`{platform}-{ordinal}`), unique within a conversation.
    pub id: String,

    /// When the message was sent. Minute precision, local wall-clock time.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author, trimmed.
    pub sender: String,

    /// Text content of the message, trimmed and non-empty.
    pub content: String,

    /// Content tag. The line grammar always produces [`MessageKind::Text`].
    pub kind: MessageKind,
}

impl Message {
    /// Creates a text message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::message::Message;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2025, 5, 15)
    ///     .unwrap()
    ///     .and_hms_opt(9, 40, 0)
    ///     .unwrap();
    /// let msg = Message::text("whatsapp-3", ts, "Bob", "Hi Alice!");
    /// assert_eq!(msg.id, "whatsapp-3");
    /// ```
    pub fn text(
        id: impl Into<String>,
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            sender: sender.into(),
            content: content.into(),
            kind: MessageKind::Text,
        }
    }

    /// Returns the number of whitespace-delimited tokens in the content.
    ///
    /// A run of non-whitespace characters counts as one token. This is the
    /// approximation used for every word count in the crate, not linguistic
    /// tokenization.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    ///
    /// The parser never stores such a message; this exists for callers that
    /// construct messages by hand.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

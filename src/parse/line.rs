//! Single-line message grammar.
//!
//! One transcript line either matches
//!
//! ```text
//! [15/05/2025, 09:40] Alice : Hello there
//! ```
//!
//! and yields a [`Message`], or it doesn't and is skipped. The comma after
//! the date and the spacing around the colons vary between real-world
//! exports, so the grammar tolerates an optional comma and flexible
//! whitespace while still requiring the literal bracket and colon anchors.
//! Platform header lines (`[WhatsApp]` etc.) are recognized and skipped,
//! not treated as malformed. Any other non-matching line (continuation
//! lines of multi-line messages, metadata) is silently dropped; the
//! grammar makes no attempt to join continuations onto the previous
//! message.

use regex::Regex;

use crate::message::Message;
use crate::platform::Platform;

use super::datetime;

/// The message line grammar.
///
/// Captures: date, time, sender (anything without a colon), content.
pub const MESSAGE_PATTERN: &str =
    r"^\[(\d{1,2}/\d{1,2}/\d{4}),?\s*(\d{1,2}:\d{2})\]\s*([^:]+?)\s*:\s*(.+)$";

/// Characters stripped from raw input before any line matching: carriage
/// returns, left/right marks, directional embedding/override controls and
/// the byte-order mark. Exporters sprinkle these around timestamps and
/// sender names.
pub fn sanitize(content: &str) -> String {
    content
        .chars()
        .filter(|c| !matches!(c, '\r' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{FEFF}'))
        .collect()
}

/// Matches transcript lines against the message grammar for one platform.
pub struct LineParser {
    platform: Platform,
    regex: Regex,
}

impl LineParser {
    /// Creates a parser tagging its messages with the given platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            regex: Regex::new(MESSAGE_PATTERN).unwrap(),
        }
    }

    /// Returns the platform this parser tags messages with.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Attempts to parse one line into a message.
    ///
    /// `ordinal` is the line's position counter used for the synthetic id
    /// (`{platform}-{ordinal}`). Returns `None` for platform headers,
    /// grammar mismatches, unresolvable dates and empty content, all of
    /// which callers skip silently.
    pub fn parse_line(&self, line: &str, ordinal: usize) -> Option<Message> {
        let line = line.trim();

        if Platform::from_header_line(line).is_some() {
            return None;
        }

        let caps = self.regex.captures(line)?;
        let timestamp = datetime::resolve(&caps[1], &caps[2])?;
        let sender = caps[3].trim();
        let content = caps[4].trim();

        if content.is_empty() {
            return None;
        }

        Some(Message::text(
            format!("{}-{}", self.platform.tag(), ordinal),
            timestamp,
            sender,
            content,
        ))
    }
}

//! Transcript parsing: format detection and the `parse_file` entry point.
//!
//! [`parse_file`] is the only call the rest of the system needs: raw file
//! text in, zero or more [`Conversation`] values out. It never fails:
//! malformed input shows up as fewer conversations (or fewer messages)
//! rather than as an error, so a batch of files can always be processed to
//! completion and the caller reports per-file outcomes.
//!
//! # Example
//!
//! ```
//! use chatlens::parse::parse_file;
//!
//! let content = "[WhatsApp]\n\
//!     [15/05/2025, 09:40] Alice : Hello there\n\
//!     [15/05/2025, 09:41] Bob : Hi Alice!\n";
//!
//! let conversations = parse_file(content, "chat.txt");
//! assert_eq!(conversations.len(), 1);
//! assert_eq!(conversations[0].message_count, 2);
//! assert_eq!(conversations[0].participants, vec!["Alice", "Bob"]);
//! ```
//!
//! # Module Structure
//!
//! - [`datetime`] — date/time token resolution
//! - [`line`] — the single-line message grammar
//! - [`multi`] — the composite multi-section format

pub mod datetime;
pub mod line;
pub mod multi;

use regex::Regex;

use crate::config::ParseConfig;
use crate::conversation::Conversation;
use crate::platform::Platform;

use line::LineParser;
use multi::MULTI_MARKER;

/// Pattern used to sniff headerless files for message-shaped lines.
const DETECT_PATTERN: &str = r"(?m)^\[\d{1,2}/\d{1,2}/\d{4},?\s*\d{1,2}:\d{2}\]\s*[^:]+\s*:";

/// Outcome of format detection.
///
/// Detection is advisory pre-routing: it decides which parsing strategy
/// runs, not whether any messages will actually parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Composite file with `[Platform](Name)` sections.
    Multi,
    /// Single-platform export.
    Platform(Platform),
    /// Nothing recognizable; no conversation will be produced.
    Unknown,
}

/// Classifies raw transcript text.
///
/// Looks at the first non-empty line: the `[Multi]` marker selects the
/// multi-section format and a platform header selects that platform. With
/// no header line at all, the body is sniffed for the message grammar and,
/// if it matches anywhere, the file is treated as the fallback platform
/// (WhatsApp by default); the grammar is shared across platforms, so
/// without a header the platform cannot be told apart.
pub fn detect_format(content: &str) -> FormatKind {
    detect_format_with(content, &ParseConfig::default())
}

/// Classifies raw transcript text using the given configuration.
pub fn detect_format_with(content: &str, config: &ParseConfig) -> FormatKind {
    if let Some(first_line) = content.lines().map(str::trim).find(|l| !l.is_empty()) {
        if first_line == MULTI_MARKER {
            return FormatKind::Multi;
        }
        if let Some(platform) = Platform::from_header_line(first_line) {
            return FormatKind::Platform(platform);
        }
    }

    let detect_regex = Regex::new(DETECT_PATTERN).unwrap();
    if detect_regex.is_match(content) {
        return FormatKind::Platform(config.fallback_platform);
    }

    FormatKind::Unknown
}

/// Parses one exported file into zero or more conversations.
///
/// Routing follows [`detect_format`]:
///
/// - multi-format files yield one conversation per non-empty section
///   (possibly none)
/// - single-platform files yield exactly one conversation, even when zero
///   lines match; the empty conversation is the caller's visible
///   "unparseable" result to report
/// - unrecognized files yield an empty list
///
/// Never panics or errors for malformed input.
pub fn parse_file(content: &str, file_name: &str) -> Vec<Conversation> {
    parse_file_with(content, file_name, &ParseConfig::default())
}

/// Parses one exported file using the given configuration.
pub fn parse_file_with(
    content: &str,
    file_name: &str,
    config: &ParseConfig,
) -> Vec<Conversation> {
    let clean = line::sanitize(content);

    match detect_format_with(&clean, config) {
        FormatKind::Multi => multi::parse_multi(&clean, config),
        FormatKind::Platform(platform) => {
            vec![parse_single(&clean, file_name, platform)]
        }
        FormatKind::Unknown => Vec::new(),
    }
}

/// Parses a sanitized single-platform export into one conversation.
///
/// Every non-empty line is attempted against the message grammar; lines
/// that fail are skipped. The line's position among non-empty lines feeds
/// the synthetic message id, so re-parsing identical input reproduces
/// identical ids.
fn parse_single(content: &str, file_name: &str, platform: Platform) -> Conversation {
    let parser = LineParser::new(platform);

    let messages = content
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .filter_map(|(ordinal, raw)| parser.parse_line(raw, ordinal))
        .collect();

    Conversation::build(messages, file_name, platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_multi() {
        assert_eq!(detect_format("[Multi]\n..."), FormatKind::Multi);
        assert_eq!(detect_format("\n\n  [Multi]\nrest"), FormatKind::Multi);
    }

    #[test]
    fn test_detect_platform_headers() {
        assert_eq!(
            detect_format("[WhatsApp]\n"),
            FormatKind::Platform(Platform::WhatsApp)
        );
        assert_eq!(
            detect_format("[Insta]\n"),
            FormatKind::Platform(Platform::Instagram)
        );
        assert_eq!(
            detect_format("[Discord]\n"),
            FormatKind::Platform(Platform::Discord)
        );
        assert_eq!(detect_format("[SMS]\n"), FormatKind::Platform(Platform::Sms));
    }

    #[test]
    fn test_detect_headerless_body_falls_back() {
        let content = "some preamble\n[15/05/2025, 09:40] Alice : hi\n";
        assert_eq!(
            detect_format(content),
            FormatKind::Platform(Platform::WhatsApp)
        );
    }

    #[test]
    fn test_detect_fallback_platform_configurable() {
        let content = "[15/05/2025, 09:40] Alice : hi\n";
        let config = ParseConfig::new().with_fallback_platform(Platform::Sms);
        assert_eq!(
            detect_format_with(content, &config),
            FormatKind::Platform(Platform::Sms)
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format(""), FormatKind::Unknown);
        assert_eq!(detect_format("plain prose, nothing else"), FormatKind::Unknown);
        assert_eq!(detect_format("2025-05-15 not our grammar"), FormatKind::Unknown);
    }

    #[test]
    fn test_parse_file_single_platform() {
        let content = "[WhatsApp]\n\
            [15/05/2025, 09:40] Alice : Hello there\n\
            [15/05/2025, 09:41] Bob : Hi Alice!\n";

        let conversations = parse_file(content, "chat.txt");
        assert_eq!(conversations.len(), 1);

        let conv = &conversations[0];
        assert_eq!(conv.platform, Platform::WhatsApp);
        assert_eq!(conv.message_count, 2);
        assert_eq!(conv.id, "chat");
    }

    #[test]
    fn test_parse_file_header_not_counted_as_message() {
        let content = "[SMS]\n[15/05/2025, 09:40] Alice : hi\n";
        let conversations = parse_file(content, "backup.txt");
        assert_eq!(conversations[0].message_count, 1);
        // Ordinal counts non-empty lines, so the header occupies ordinal 0
        assert_eq!(conversations[0].messages[0].id, "sms-1");
    }

    #[test]
    fn test_parse_file_empty_conversation_still_returned() {
        let content = "[WhatsApp]\nno message lines at all\n";
        let conversations = parse_file(content, "broken.txt");
        assert_eq!(conversations.len(), 1);
        assert!(conversations[0].is_empty());
    }

    #[test]
    fn test_parse_file_unknown_returns_empty_list() {
        let conversations = parse_file("nothing recognizable", "mystery.txt");
        assert!(conversations.is_empty());
    }

    #[test]
    fn test_parse_file_multi_routes_to_sections() {
        let content = "[Multi]\n\
            [WhatsApp](Team A)\n\
            [15/05/2025, 09:40] Alice : hi\n";

        let conversations = parse_file(content, "combo.lov");
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].custom_name.as_deref(), Some("Team A"));
    }

    #[test]
    fn test_parse_file_sanitizes_before_detection() {
        // A BOM before the header must not hide the format
        let content = "\u{FEFF}[WhatsApp]\n[15/05/2025, 09:40] Alice : hi\r\n";
        let conversations = parse_file(content, "chat.txt");
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].message_count, 1);
    }

    #[test]
    fn test_parse_file_is_deterministic() {
        let content = "[WhatsApp]\n\
            [15/05/2025, 09:40] Alice : Hello there\n\
            garbage line\n\
            [15/05/2025, 09:41] Bob : Hi Alice!\n";

        let first = parse_file(content, "chat.txt");
        let second = parse_file(content, "chat.txt");
        assert_eq!(first[0].message_count, second[0].message_count);
        assert_eq!(first[0].word_count, second[0].word_count);
        assert_eq!(first[0].participants, second[0].participants);

        let ids_first: Vec<&str> = first[0].messages.iter().map(|m| m.id.as_str()).collect();
        let ids_second: Vec<&str> = second[0].messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids_first, ids_second);
    }
}

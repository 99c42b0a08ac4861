//! Multi-section composite format.
//!
//! A multi-format file opens with a `[Multi]` marker line and groups
//! messages into sections, each introduced by a header naming a platform
//! and a conversation:
//!
//! ```text
//! [Multi]
//! [WhatsApp](Team A)
//! [15/05/2025, 09:40] Alice : Hello there
//! [Discord](Team B)
//! [15/05/2025, 10:00] Carol : hey
//! ```
//!
//! Each section becomes one [`Conversation`] named after its header. The
//! message ordinal used for synthetic ids increments across the whole file,
//! not per section, so ids stay unique when sections are later merged.
//! A section that parses zero messages is dropped entirely, unlike the
//! single-format path, which emits an empty conversation (see
//! [`crate::config::ParseConfig::drop_empty_sections`]).

use regex::Regex;

use crate::config::ParseConfig;
use crate::conversation::Conversation;
use crate::message::Message;
use crate::platform::Platform;

use super::line::LineParser;

/// The section header grammar: `[PlatformToken](Section Name)`.
pub const SECTION_PATTERN: &str = r"^\[(\w+)\]\(([^)]+)\)$";

/// The top-level marker line identifying a multi-format file.
pub const MULTI_MARKER: &str = "[Multi]";

struct Section {
    name: String,
    parser: LineParser,
    messages: Vec<Message>,
}

impl Section {
    fn new(token: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            parser: LineParser::new(Platform::from_section_token(token)),
            messages: Vec::new(),
        }
    }

    fn flush(self, out: &mut Vec<Conversation>, config: &ParseConfig) {
        if self.messages.is_empty() && config.drop_empty_sections {
            return;
        }
        let platform = self.parser.platform();
        let conversation =
            Conversation::build(self.messages, &self.name, platform).with_custom_name(self.name.clone());
        out.push(conversation);
    }
}

/// Parses a sanitized multi-format file into one conversation per section.
///
/// Lines before the first section header are ignored, as are blank lines
/// and repeated `[Multi]` markers. A trailing section with no following
/// header is flushed at end of input.
pub fn parse_multi(content: &str, config: &ParseConfig) -> Vec<Conversation> {
    let section_regex = Regex::new(SECTION_PATTERN).unwrap();

    let mut conversations = Vec::new();
    let mut current: Option<Section> = None;
    let mut message_index = 0usize;

    for raw in content.split('\n') {
        let line = raw.trim();

        if line.is_empty() || line == MULTI_MARKER {
            continue;
        }

        if let Some(caps) = section_regex.captures(line) {
            if let Some(done) = current.take() {
                done.flush(&mut conversations, config);
            }
            current = Some(Section::new(&caps[1], &caps[2]));
            continue;
        }

        if let Some(section) = current.as_mut() {
            if let Some(msg) = section.parser.parse_line(line, message_index) {
                message_index += 1;
                section.messages.push(msg);
            }
        }
    }

    if let Some(done) = current.take() {
        done.flush(&mut conversations, config);
    }

    conversations
}

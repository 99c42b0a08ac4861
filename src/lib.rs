//! # Chatlens
//!
//! A Rust library for parsing exported chat transcripts and deriving
//! conversation analytics.
//!
//! ## Overview
//!
//! Chatlens understands the bracketed-timestamp transcript family shared by
//! text exports from:
//! - **WhatsApp** — `[WhatsApp]` header
//! - **Instagram** — `[Insta]` header
//! - **Discord** — `[Discord]` header
//! - **SMS** — `[SMS]` header
//!
//! plus a composite **multi-format** (`[Multi]`) that packs several
//! conversations into one file with `[Platform](Name)` section headers.
//!
//! Parsing is best-effort by design: lines that don't match the message
//! grammar are skipped, unrecognized files produce zero conversations, and
//! nothing in the parsing or analytics path returns an error for malformed
//! input. A batch of files always processes to completion.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let content = "[WhatsApp]\n\
//!     [15/05/2025, 09:40] Alice : Hello there\n\
//!     [15/05/2025, 09:41] Bob : Hi Alice!\n";
//!
//! let conversations = parse_file(content, "chat.txt");
//! assert_eq!(conversations.len(), 1);
//! assert_eq!(conversations[0].message_count, 2);
//!
//! let summary = AnalyticsSummary::generate(&conversations);
//! assert_eq!(summary.hourly_activity.len(), 24);
//! ```
//!
//! ## Module Structure
//!
//! - [`parse`] — format detection and the [`parse_file`](parse::parse_file)
//!   entry point
//!   - [`parse::datetime`] — date/time token resolution
//!   - [`parse::line`] — the single-line message grammar
//!   - [`parse::multi`] — the composite multi-section format
//! - [`analytics`] — pure analytics over parsed conversations
//!   - [`analytics::timeline`] — activity series and hourly histogram
//!   - [`analytics::sentiment`] — keyword mood metrics
//!   - [`analytics::words`] — word frequency tables
//!   - [`analytics::participants`] — per-participant rollups
//! - [`conversation`] — the [`Conversation`] aggregate and per-conversation
//!   stats
//! - [`message`] — the parsed [`Message`] type
//! - [`platform`] — platform tags and header literals
//! - [`storage`] — serializable boundary records with ISO-8601 dates
//! - [`output`] — JSON/CSV report writers
//! - [`config`] — parsing options ([`ParseConfig`](config::ParseConfig))
//! - [`perf`] — bounded measurement log for callers that monitor timings
//! - [`cli`] — CLI types ([`Args`](cli::Args), requires the `cli` feature)
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod message;
pub mod output;
pub mod parse;
pub mod perf;
pub mod platform;
pub mod storage;

// Re-export the main types at the crate root for convenience
pub use conversation::Conversation;
pub use error::{ChatlensError, Result};
pub use message::Message;
pub use platform::Platform;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core entity types
    pub use crate::conversation::{Conversation, ConversationStats};
    pub use crate::message::{Message, MessageKind};
    pub use crate::platform::Platform;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing entry points
    pub use crate::config::ParseConfig;
    pub use crate::parse::{FormatKind, detect_format, parse_file, parse_file_with};

    // Analytics
    pub use crate::analytics::{
        AnalyticsSummary, EmotionalMetrics, HourlyActivity, ParticipantActivity,
        SentimentCategory, TimelineEntry, TimelinePeriod, WordFrequency, analyze_emotions,
        generate_timeline, generate_word_cloud, hourly_activity, participant_activity,
    };

    // Storage boundary
    pub use crate::storage::{ConversationRecord, MessageRecord, restore_all};
}

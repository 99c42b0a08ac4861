//! Analytics over parsed conversations.
//!
//! Every function in this module is a pure batch computation: it takes a
//! slice of [`Conversation`] values (plus the occasional granularity or
//! limit parameter) and returns a fresh result without mutating its input
//! or holding state between calls. Callers recompute wholesale whenever
//! their filters change; there is no incremental update path.
//!
//! # Module Structure
//!
//! - [`timeline`] — time-bucketed activity series and the hourly histogram
//! - [`sentiment`] — keyword-based emotional metrics
//! - [`words`] — word frequency tables for word clouds
//! - [`participants`] — per-participant rollups
//!
//! [`AnalyticsSummary`] bundles all of them in one call.
//!
//! # Example
//!
//! ```
//! use chatlens::analytics::AnalyticsSummary;
//! use chatlens::parse::parse_file;
//!
//! let content = "[WhatsApp]\n\
//!     [15/05/2025, 09:40] Alice : Hello there\n\
//!     [15/05/2025, 09:41] Bob : what a magnifique morning\n";
//! let conversations = parse_file(content, "chat.txt");
//!
//! let summary = AnalyticsSummary::generate(&conversations);
//! assert_eq!(summary.hourly_activity.len(), 24);
//! assert!(summary.emotional_metrics.mood_score >= -100);
//! ```

pub mod participants;
pub mod sentiment;
pub mod timeline;
pub mod words;

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;

pub use participants::{ParticipantActivity, participant_activity};
pub use sentiment::{EmotionalMetrics, SentimentCategory, analyze_emotions};
pub use timeline::{
    HourlyActivity, TimelineEntry, TimelinePeriod, generate_timeline, hourly_activity,
};
pub use words::{DEFAULT_WORD_CLOUD_LIMIT, WordFrequency, generate_word_cloud};

/// Everything the analytics engine derives, in one structure.
///
/// Convenience aggregate for callers that want the full picture at once;
/// each field is exactly what the corresponding standalone function
/// returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Time-bucketed activity series.
    pub timeline: Vec<TimelineEntry>,

    /// Fixed 24-slot hour-of-day histogram.
    pub hourly_activity: Vec<HourlyActivity>,

    /// Keyword sentiment metrics.
    pub emotional_metrics: EmotionalMetrics,

    /// Word frequency table.
    pub word_frequency: Vec<WordFrequency>,

    /// Per-participant rollups.
    pub participants: HashMap<String, ParticipantActivity>,

    /// Earliest message timestamp across the non-empty conversations.
    pub start_date: Option<NaiveDateTime>,

    /// Latest message timestamp across the non-empty conversations.
    pub end_date: Option<NaiveDateTime>,
}

impl AnalyticsSummary {
    /// Computes the full summary with day buckets and the default word
    /// cloud limit.
    pub fn generate(conversations: &[Conversation]) -> Self {
        Self::generate_with(
            conversations,
            TimelinePeriod::default(),
            DEFAULT_WORD_CLOUD_LIMIT,
        )
    }

    /// Computes the full summary with explicit bucket granularity and word
    /// cloud limit.
    pub fn generate_with(
        conversations: &[Conversation],
        period: TimelinePeriod,
        word_limit: usize,
    ) -> Self {
        let populated: Vec<&Conversation> =
            conversations.iter().filter(|c| !c.is_empty()).collect();
        let start_date = populated.iter().map(|c| c.start_date).min();
        let end_date = populated.iter().map(|c| c.end_date).max();

        Self {
            timeline: generate_timeline(conversations, period),
            hourly_activity: hourly_activity(conversations),
            emotional_metrics: analyze_emotions(conversations),
            word_frequency: generate_word_cloud(conversations, word_limit),
            participants: participant_activity(conversations),
            start_date,
            end_date,
        }
    }

    /// Total messages across the summarized conversations.
    pub fn total_messages(&self) -> usize {
        self.hourly_activity.iter().map(|h| h.count).sum()
    }
}

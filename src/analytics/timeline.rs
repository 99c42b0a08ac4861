//! Time-bucketed activity series.
//!
//! [`generate_timeline`] groups every message into a date bucket (day,
//! week or month) and accumulates per-bucket message and word counts.
//! [`hourly_activity`] is the fixed 24-slot hour-of-day histogram.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;

/// Timeline bucket granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelinePeriod {
    /// One bucket per calendar date
    #[default]
    Day,
    /// One bucket per week, keyed on that week's Sunday
    Week,
    /// One bucket per `YYYY-MM` month
    Month,
}

impl TimelinePeriod {
    /// Returns all period names.
    pub fn all_names() -> &'static [&'static str] {
        &["day", "week", "month"]
    }
}

impl std::fmt::Display for TimelinePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelinePeriod::Day => write!(f, "day"),
            TimelinePeriod::Week => write!(f, "week"),
            TimelinePeriod::Month => write!(f, "month"),
        }
    }
}

impl std::str::FromStr for TimelinePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(TimelinePeriod::Day),
            "week" => Ok(TimelinePeriod::Week),
            "month" => Ok(TimelinePeriod::Month),
            _ => Err(format!(
                "Unknown period: '{}'. Expected one of: {}",
                s,
                TimelinePeriod::all_names().join(", ")
            )),
        }
    }
}

/// One timeline bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Bucket key: `YYYY-MM-DD` for day and week buckets, `YYYY-MM` for
    /// month buckets. Zero-padded, so lexicographic order is date order.
    pub date: String,

    /// Messages in the bucket.
    pub messages: usize,

    /// Whitespace-token word count in the bucket.
    pub words: usize,
}

/// One hour-of-day histogram slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Local hour of day, 0-23.
    pub hour: u32,

    /// Messages sent during this hour, raw count.
    pub count: usize,
}

/// Buckets every message of the given conversations by its timestamp.
///
/// Output is sorted ascending by bucket key; all three key formats are
/// zero-padded and date-ordered, so lexicographic order is chronological.
pub fn generate_timeline(
    conversations: &[Conversation],
    period: TimelinePeriod,
) -> Vec<TimelineEntry> {
    let mut buckets: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for conv in conversations {
        for msg in &conv.messages {
            let entry = buckets.entry(bucket_key(msg.timestamp, period)).or_default();
            entry.0 += 1;
            entry.1 += msg.word_count();
        }
    }

    buckets
        .into_iter()
        .map(|(date, (messages, words))| TimelineEntry {
            date,
            messages,
            words,
        })
        .collect()
}

/// Computes the bucket key for a timestamp at the given granularity.
///
/// Week keys are the date of that week's Sunday, computed by subtracting
/// the weekday offset rather than consulting a locale.
fn bucket_key(timestamp: NaiveDateTime, period: TimelinePeriod) -> String {
    match period {
        TimelinePeriod::Day => timestamp.date().format("%Y-%m-%d").to_string(),
        TimelinePeriod::Week => {
            let date = timestamp.date();
            let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
            sunday.format("%Y-%m-%d").to_string()
        }
        TimelinePeriod::Month => timestamp.date().format("%Y-%m").to_string(),
    }
}

/// Counts messages by local hour of day.
///
/// The result always has exactly 24 entries, one per hour, with raw counts
/// and no normalization.
pub fn hourly_activity(conversations: &[Conversation]) -> Vec<HourlyActivity> {
    let mut counts = [0usize; 24];

    for conv in conversations {
        for msg in &conv.messages {
            counts[msg.timestamp.hour() as usize] += 1;
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourlyActivity {
            hour: hour as u32,
            count,
        })
        .collect()
}

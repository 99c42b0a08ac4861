//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Period`] - Timeline bucket granularity options
//! - [`ReportFormat`] - Report output format options
//!
//! The CLI enums convert into the library's own types so the analytics
//! engine never depends on clap:
//!
//! ```rust
//! use chatlens::analytics::TimelinePeriod;
//! use chatlens::cli::Period;
//!
//! let period: TimelinePeriod = Period::Week.into();
//! assert_eq!(period, TimelinePeriod::Week);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analytics::TimelinePeriod;

/// Parse exported chat transcripts and derive timelines, sentiment and
/// activity analytics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --stats
    chatlens export.lov --period week
    chatlens combined.txt other.txt -o report.json
    chatlens chat.txt -o timeline.csv --format csv
    chatlens chat.txt --words 20")]
pub struct Args {
    /// Transcript file(s) to analyze
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Timeline bucket granularity
    #[arg(short, long, value_enum, default_value = "day")]
    pub period: Period,

    /// Maximum entries in the word frequency table
    #[arg(short, long, value_name = "N", default_value_t = 50)]
    pub words: usize,

    /// Print per-conversation participant statistics
    #[arg(short, long)]
    pub stats: bool,

    /// Write the report to this file instead of only printing a summary
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report format for --output
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

/// Timeline bucket granularity options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bucket per calendar date
    #[default]
    Day,

    /// One bucket per week (keyed on that week's Sunday)
    Week,

    /// One bucket per month
    Month,
}

impl From<Period> for TimelinePeriod {
    fn from(period: Period) -> TimelinePeriod {
        match period {
            Period::Day => TimelinePeriod::Day,
            Period::Week => TimelinePeriod::Week,
            Period::Month => TimelinePeriod::Month,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Week => write!(f, "week"),
            Period::Month => write!(f, "month"),
        }
    }
}

/// Report output formats.
///
/// - [`Json`](ReportFormat::Json) - the full analytics summary
/// - [`Csv`](ReportFormat::Csv) - the timeline table, plus the word
///   frequency table next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// JSON report with every analytics section
    #[default]
    Json,

    /// Semicolon-delimited CSV tables
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

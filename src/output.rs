//! Report writers for analytics results.
//!
//! The analytics summary serializes to JSON as a whole; the tabular pieces
//! (timeline, word frequencies) also export as semicolon-delimited CSV for
//! spreadsheet use.

#[cfg(feature = "csv-output")]
use std::io;

#[cfg(feature = "json-output")]
use std::fs::File;
#[cfg(feature = "json-output")]
use std::io::Write;

#[cfg(any(feature = "json-output", feature = "csv-output"))]
use crate::error::Result;

#[cfg(feature = "json-output")]
use crate::analytics::AnalyticsSummary;
#[cfg(feature = "csv-output")]
use crate::analytics::{TimelineEntry, WordFrequency};

/// Converts the analytics summary to pretty-printed JSON.
#[cfg(feature = "json-output")]
pub fn to_json(summary: &AnalyticsSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Writes the analytics summary to a JSON file.
#[cfg(feature = "json-output")]
pub fn write_json(summary: &AnalyticsSummary, output_path: &str) -> Result<()> {
    let json = to_json(summary)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the timeline to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Messages`, `Words`
#[cfg(feature = "csv-output")]
pub fn to_timeline_csv(timeline: &[TimelineEntry]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["Date", "Messages", "Words"])?;
    for entry in timeline {
        writer.write_record([
            entry.date.as_str(),
            &entry.messages.to_string(),
            &entry.words.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(io::Error::other)?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the timeline to a CSV file.
#[cfg(feature = "csv-output")]
pub fn write_timeline_csv(timeline: &[TimelineEntry], output_path: &str) -> Result<()> {
    std::fs::write(output_path, to_timeline_csv(timeline)?)?;
    Ok(())
}

/// Converts the word frequency table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Word`, `Count`, `Category`
#[cfg(feature = "csv-output")]
pub fn to_word_frequency_csv(words: &[WordFrequency]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["Word", "Count", "Category"])?;
    for entry in words {
        writer.write_record([
            entry.word.as_str(),
            &entry.count.to_string(),
            &entry.category.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(io::Error::other)?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the word frequency table to a CSV file.
#[cfg(feature = "csv-output")]
pub fn write_word_frequency_csv(words: &[WordFrequency], output_path: &str) -> Result<()> {
    std::fs::write(output_path, to_word_frequency_csv(words)?)?;
    Ok(())
}

//! Date/time resolution for transcript timestamps.
//!
//! Transcript lines carry a `D/M/YYYY` date token and an `H:MM` time token.
//! [`resolve`] converts the pair into a [`NaiveDateTime`] at minute
//! resolution, or `None` when either token fails its shape check or a
//! numeric field is out of range. Callers treat `None` as "unparseable
//! line" and skip the line rather than abort the whole file.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap())
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap())
}

/// Resolves a `day/month/year` date token and an `hour:minute` time token
/// into a local wall-clock timestamp.
///
/// Returns `None` (never panics) when a token has the wrong shape or a
/// field is out of calendar range: `31/02/2025` is rejected, not rolled
/// over into March.
///
/// # Example
///
/// ```rust
/// use chatlens::parse::datetime::resolve;
///
/// let ts = resolve("15/05/2025", "09:40").unwrap();
/// assert_eq!(ts.to_string(), "2025-05-15 09:40:00");
///
/// assert!(resolve("31/02/2025", "09:40").is_none());
/// assert!(resolve("15-05-2025", "09:40").is_none());
/// ```
pub fn resolve(date: &str, time: &str) -> Option<NaiveDateTime> {
    let d = date_regex().captures(date)?;
    let t = time_regex().captures(time)?;

    let day: u32 = d[1].parse().ok()?;
    let month: u32 = d[2].parse().ok()?;
    let year: i32 = d[3].parse().ok()?;
    let hour: u32 = t[1].parse().ok()?;
    let minute: u32 = t[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

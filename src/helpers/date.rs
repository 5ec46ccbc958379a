//! Date helper functions

use chrono::{DateTime, SecondsFormat, TimeZone};

/// Format a date in ISO 8601 form, e.g. `2025-04-25T10:00:00Z`
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format date in full format (like "April 8, 2025")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format a reading time, e.g. "6 min read"
pub fn read_time(minutes: u32) -> String {
    format!("{} min read", minutes)
}

//! Helpers for escaping, timestamp handling and log-friendly strings.
//!
//! - Markup escaping for post bodies
//! - Lenient timestamp parsing and long-form date rendering
//! - Block-quote prefixing for nested text
//! - String truncation for logging

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use itertools::Itertools;
use tracing::debug;

/// Rendered in place of a missing or unparseable timestamp.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Legacy X/Twitter API timestamp, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const TWITTER_LEGACY_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Offset-less date-times, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Escape `<` and `>` so post text cannot be read as embedded HTML.
///
/// No other characters are touched.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_markup("a <b> & c"), "a &lt;b&gt; & c");
/// ```
pub fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Parse a post timestamp in any of the shapes found in bookmark exports.
///
/// Accepted, in order: RFC 3339, RFC 2822, the legacy X/Twitter API form,
/// offset-less ISO date-times and bare ISO dates. The latter two are taken
/// as UTC. Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, TWITTER_LEGACY_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a timestamp in the en-US long form, e.g. `January 5, 2024 at 03:07 PM`.
pub fn format_long_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Render an optional raw timestamp, falling back to [`UNKNOWN_DATE`].
pub fn format_created_at(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_DATE.to_string();
    };
    match parse_timestamp(raw) {
        Some(dt) => format_long_date(&dt),
        None => {
            debug!(created_at = %truncate_for_log(raw, 64), "Unparseable timestamp");
            UNKNOWN_DATE.to_string()
        }
    }
}

/// Prefix every line of `text` with the block-quote marker.
///
/// Empty text still yields a single marker line.
pub fn blockquote(text: &str) -> String {
    format!("> {}", text.split('\n').join("\n> "))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and the number
/// of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

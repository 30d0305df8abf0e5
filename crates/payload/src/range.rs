use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Separator between the two ends of a stored range string.
pub const DEFAULT_DELIMITER: &str = "|";

/// `(start, end)`; either side may be unset.
pub type DateTimeRange = (Option<DateTime<Utc>>, Option<DateTime<Utc>>);

/// Reads `"startISO|endISO"` back into a range.
///
/// Empty input gives `(None, None)`. A side that is empty, missing or not a
/// parseable timestamp comes back as `None`.
pub fn parse_range_string(value: &str, delimiter: &str) -> DateTimeRange {
    if value.is_empty() {
        return (None, None);
    }
    let mut parts = value.split(delimiter);
    let start = parts.next().and_then(parse_iso);
    let end = parts.next().and_then(parse_iso);
    (start, end)
}

/// Stores a range as `"startISO{delimiter}endISO"`, or `""` unless both ends
/// are set.
pub fn to_range_string(range: &DateTimeRange, delimiter: &str) -> String {
    match range {
        (Some(start), Some(end)) => format!("{}{delimiter}{}", to_iso(start), to_iso(end)),
        _ => String::new(),
    }
}

/// Formats with a chrono format string; `""` when unset or when the format
/// string has an unknown specifier.
pub fn format_date_time(value: Option<&DateTime<Utc>>, format: &str) -> String {
    let Some(dt) = value else {
        return String::new();
    };
    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

/// Text shown in the range field: `"start → end"`, or `""` unless both ends
/// are set.
pub fn display_range(range: &DateTimeRange, format: &str) -> String {
    match range {
        (Some(start), Some(end)) => format!(
            "{} → {}",
            format_date_time(Some(start), format),
            format_date_time(Some(end), format)
        ),
        _ => String::new(),
    }
}

/// True only when both ends are set and the end precedes the start.
pub fn is_invalid_range(range: &DateTimeRange) -> bool {
    matches!(range, (Some(start), Some(end)) if end < start)
}

fn to_iso(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// RFC 3339 with offset, a naive `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC) or a
/// bare date (midnight UTC).
fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

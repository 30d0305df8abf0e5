use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::schedule::{DateRange, ScheduleEntry};
use super::time::TimeOfDay;

/// Submission payload of the batch creation form after pruning.
///
/// Pruning drops every empty field, so anything the form may leave blank is
/// optional here and reported as missing by validation rather than failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programme_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_status: Option<bool>,
    #[serde(rename = "captchaToken", default, skip_serializing_if = "Option::is_none")]
    pub captcha_token: Option<String>,
    #[serde(default)]
    pub schedules: Vec<ScheduleItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_end_time: Option<TimeOfDay>,
}

/// A schedule row as submitted, before its date has been checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,
}

impl From<&ScheduleEntry> for ScheduleItem {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            date: Some(entry.date.format("%Y-%m-%d").to_string()),
            start_time: Some(entry.start_time.clone()),
            end_time: Some(entry.end_time.clone()),
        }
    }
}

impl ScheduleItem {
    /// The typed entry, when the date parses and both times are present.
    pub fn to_entry(&self) -> Option<ScheduleEntry> {
        let date = self.date.as_deref().and_then(parse_calendar_date)?;
        Some(ScheduleEntry {
            date,
            start_time: self.start_time.clone()?,
            end_time: self.end_time.clone()?,
        })
    }
}

impl BatchCreateRequest {
    pub fn date_range(&self) -> DateRange {
        DateRange::new(
            self.batch_start_date.as_deref().and_then(parse_calendar_date),
            self.batch_end_date.as_deref().and_then(parse_calendar_date),
        )
    }

    /// Typed entries of the rows that convert; incomplete rows are skipped.
    pub fn schedule_entries(&self) -> Vec<ScheduleEntry> {
        self.schedules.iter().filter_map(ScheduleItem::to_entry).collect()
    }

    /// Typed entries of every row, or `None` as soon as one row lacks a time
    /// or has an unparseable date.
    pub fn complete_schedule_entries(&self) -> Option<Vec<ScheduleEntry>> {
        self.schedules.iter().map(ScheduleItem::to_entry).collect()
    }

    pub fn set_schedule_entries(&mut self, entries: &[ScheduleEntry]) {
        self.schedules = entries.iter().map(ScheduleItem::from).collect();
    }
}

/// Accepts a bare `YYYY-MM-DD` day or a full RFC 3339 timestamp, whose
/// calendar day (in its own offset) is taken.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

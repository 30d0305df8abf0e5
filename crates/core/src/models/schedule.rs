use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// One day of a batch schedule. Entries are keyed by `date`: a schedule set
/// never holds two entries for the same day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl ScheduleEntry {
    pub fn new(date: NaiveDate, start_time: impl Into<TimeOfDay>, end_time: impl Into<TimeOfDay>) -> Self {
        Self {
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// True when both times equal the given pair.
    pub fn has_times(&self, start_time: &TimeOfDay, end_time: &TimeOfDay) -> bool {
        self.start_time == *start_time && self.end_time == *end_time
    }

    /// True when either time differs from the session defaults.
    pub fn is_custom(&self, default_start: &TimeOfDay, default_end: &TimeOfDay) -> bool {
        !self.has_times(default_start, default_end)
    }
}

/// The batch date range as the form holds it: either endpoint may still be
/// unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both endpoints, or `None` while the range is incomplete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    pub fn is_selected(&self) -> bool {
        self.bounds().is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= date && date <= end)
    }
}

use std::collections::{HashMap, HashSet};

use batchform_core::models::{DateRange, ScheduleEntry, TimeOfDay};
use chrono::NaiveDate;
use tracing::debug;

/// Result of deriving a schedule from a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDerivation {
    /// One entry per day of the range, ascending by date.
    pub schedules: Vec<ScheduleEntry>,
    /// Days in range that carry no custom override yet, ascending.
    pub available_dates: Vec<NaiveDate>,
}

/// Every calendar day from `start` to `end` inclusive, ascending.
///
/// A reversed range yields no days.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Rebuilds the schedule for `range`, keeping previously entered entries.
///
/// Each day in range starts from the default times; an entry in `existing`
/// for the same day replaces that candidate as-is. Days that fell out of the
/// range are dropped.
///
/// `available_dates` is computed against `existing` (not the merged result):
/// a day is available when it is in range and no existing entry for it has
/// times differing from the defaults.
///
/// While either endpoint of `range` is unset the schedule is returned
/// unchanged and no dates are available.
///
/// # Example
///
/// ```
/// use batchform_core::models::{DateRange, ScheduleEntry, TimeOfDay};
/// use batchform_schedule::derive_schedule;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let existing = vec![ScheduleEntry::new(day(2), "10:00", "12:00")];
///
/// let derived = derive_schedule(
///     &DateRange::between(day(1), day(3)),
///     &TimeOfDay::new("09:00"),
///     &TimeOfDay::new("17:00"),
///     &existing,
/// );
///
/// assert_eq!(derived.schedules.len(), 3);
/// assert_eq!(derived.schedules[1], existing[0]);
/// assert_eq!(derived.available_dates, vec![day(1), day(3)]);
/// ```
pub fn derive_schedule(
    range: &DateRange,
    default_start: &TimeOfDay,
    default_end: &TimeOfDay,
    existing: &[ScheduleEntry],
) -> ScheduleDerivation {
    let Some((start, end)) = range.bounds() else {
        return ScheduleDerivation {
            schedules: existing.to_vec(),
            available_dates: Vec::new(),
        };
    };

    let days = days_in_range(start, end);

    // First entry wins if the caller handed in duplicate dates.
    let mut by_date: HashMap<NaiveDate, &ScheduleEntry> = HashMap::with_capacity(existing.len());
    for entry in existing {
        by_date.entry(entry.date).or_insert(entry);
    }

    let schedules: Vec<ScheduleEntry> = days
        .iter()
        .map(|day| match by_date.get(day) {
            Some(entry) => (*entry).clone(),
            None => ScheduleEntry::new(*day, default_start.clone(), default_end.clone()),
        })
        .collect();

    let custom_dates: HashSet<NaiveDate> = existing
        .iter()
        .filter(|entry| entry.is_custom(default_start, default_end))
        .map(|entry| entry.date)
        .collect();

    let available_dates: Vec<NaiveDate> = days
        .into_iter()
        .filter(|day| !custom_dates.contains(day))
        .collect();

    debug!(
        %start,
        %end,
        days = schedules.len(),
        custom = custom_dates.len(),
        "derived batch schedule"
    );

    ScheduleDerivation {
        schedules,
        available_dates,
    }
}

use batchform_core::models::{ScheduleEntry, TimeOfDay};
use chrono::NaiveDate;
use tracing::debug;

/// Overwrites the times of every entry with the defaults, discarding all
/// custom overrides. Dates and order are kept.
pub fn apply_defaults_to_all(
    schedules: &[ScheduleEntry],
    default_start: &TimeOfDay,
    default_end: &TimeOfDay,
) -> Vec<ScheduleEntry> {
    schedules
        .iter()
        .map(|entry| ScheduleEntry::new(entry.date, default_start.clone(), default_end.clone()))
        .collect()
}

/// Sets the times for `date`.
///
/// An existing entry for the date is replaced where it stands; otherwise the
/// new entry is appended at the end, so the result is no longer sorted by date
/// when `date` precedes the last entry.
pub fn add_or_replace_custom_date(
    schedules: &[ScheduleEntry],
    date: NaiveDate,
    start_time: &TimeOfDay,
    end_time: &TimeOfDay,
) -> Vec<ScheduleEntry> {
    let mut updated = schedules.to_vec();
    let entry = ScheduleEntry::new(date, start_time.clone(), end_time.clone());

    match updated.iter().position(|existing| existing.date == date) {
        Some(index) => {
            debug!(%date, index, "replacing schedule entry");
            updated[index] = entry;
        }
        None => {
            debug!(%date, "appending schedule entry");
            updated.push(entry);
        }
    }

    updated
}

/// Puts the entry for `date` back on the default times. Other entries, and a
/// schedule without that date, are left untouched.
pub fn reset_to_default(
    schedules: &[ScheduleEntry],
    date: NaiveDate,
    default_start: &TimeOfDay,
    default_end: &TimeOfDay,
) -> Vec<ScheduleEntry> {
    schedules
        .iter()
        .map(|entry| {
            if entry.date == date {
                ScheduleEntry::new(date, default_start.clone(), default_end.clone())
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// The entries whose times differ from the defaults, in schedule order.
pub fn custom_schedules<'a>(
    schedules: &'a [ScheduleEntry],
    default_start: &TimeOfDay,
    default_end: &TimeOfDay,
) -> Vec<&'a ScheduleEntry> {
    schedules
        .iter()
        .filter(|entry| entry.is_custom(default_start, default_end))
        .collect()
}

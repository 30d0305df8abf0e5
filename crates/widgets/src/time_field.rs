use batchform_core::models::TimeOfDay;
use chrono::{Duration, NaiveTime, Timelike};

const MINUTE_STEP: i64 = 5;
const SHIFT_MINUTE_STEP: i64 = 15;
const PAGE_STEP: i64 = 30;

/// Keys the time field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKey {
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    PageUp,
    PageDown,
    Home,
    End,
    Space,
}

impl TimeKey {
    /// Maps a DOM `KeyboardEvent.key` value; `None` for keys the field lets
    /// through.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(TimeKey::ArrowUp),
            "ArrowDown" => Some(TimeKey::ArrowDown),
            "ArrowRight" => Some(TimeKey::ArrowRight),
            "ArrowLeft" => Some(TimeKey::ArrowLeft),
            "PageUp" => Some(TimeKey::PageUp),
            "PageDown" => Some(TimeKey::PageDown),
            "Home" => Some(TimeKey::Home),
            "End" => Some(TimeKey::End),
            " " | "Spacebar" => Some(TimeKey::Space),
            _ => None,
        }
    }
}

/// Applies one key press to the time field value.
///
/// Hours wrap around the day and minute steps roll over midnight. With
/// `shift` held the arrow keys move by 15 minutes instead of 5. The result is
/// clamped to `min`/`max` when those parse.
///
/// Returns `None` when the field is empty or does not hold a valid time.
pub fn step_time(
    current: &TimeOfDay,
    key: TimeKey,
    shift: bool,
    min: Option<&TimeOfDay>,
    max: Option<&TimeOfDay>,
) -> Option<TimeOfDay> {
    let time = current.to_naive_time()?;
    let hour = time.hour();
    let minute_step = if shift { SHIFT_MINUTE_STEP } else { MINUTE_STEP };

    let mut updated = match key {
        TimeKey::ArrowUp => with_hour(time, (hour + 1) % 24),
        TimeKey::ArrowDown => with_hour(time, (hour + 23) % 24),
        TimeKey::ArrowRight => add_minutes(time, minute_step),
        TimeKey::ArrowLeft => add_minutes(time, -minute_step),
        TimeKey::PageUp => add_minutes(time, PAGE_STEP),
        TimeKey::PageDown => add_minutes(time, -PAGE_STEP),
        TimeKey::Home => NaiveTime::from_hms_opt(0, 0, 0)?,
        TimeKey::End => NaiveTime::from_hms_opt(23, 59, 0)?,
        TimeKey::Space => with_hour(time, if hour < 12 { hour + 12 } else { hour - 12 }),
    };

    if let Some(min) = min.and_then(TimeOfDay::to_naive_time) {
        updated = updated.max(min);
    }
    if let Some(max) = max.and_then(TimeOfDay::to_naive_time) {
        updated = updated.min(max);
    }

    Some(TimeOfDay::from_naive_time(updated))
}

fn with_hour(time: NaiveTime, hour: u32) -> NaiveTime {
    time.with_hour(hour).unwrap_or(time)
}

fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(minutes)).0
}

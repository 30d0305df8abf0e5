use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

const WIRE_FORMAT: &str = "%H:%M";

static TIME_SHAPE_REGEX: OnceLock<Regex> = OnceLock::new();

fn time_shape_regex() -> &'static Regex {
    TIME_SHAPE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time shape regex"))
}

/// Wall-clock time of day in `HH:MM` 24-hour notation.
///
/// The value is kept verbatim: malformed input is not rejected here but by the
/// validation layer, so a bad value flows through schedule derivation
/// untouched. Comparison is lexical, which matches chronological order for
/// well-formed, zero-padded values.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self(time.format(WIRE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the value has the shape `DD:DD` (two digits, colon, two digits).
    pub fn is_well_formed(&self) -> bool {
        time_shape_regex().is_match(&self.0)
    }

    /// Parses the value as a real clock time; `None` for `24:00`, `12:60`, etc.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.is_well_formed() {
            return None;
        }
        NaiveTime::parse_from_str(&self.0, WIRE_FORMAT).ok()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeOfDay {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TimeOfDay {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(value: NaiveTime) -> Self {
        Self::from_naive_time(value)
    }
}

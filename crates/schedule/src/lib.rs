//! # BatchForm Schedule
//!
//! Derives the per-day schedule of a batch from its date range and the
//! session-wide default times, and applies the per-day override operations the
//! form offers on top of it.
//!
//! ## Model
//!
//! - A schedule holds exactly one entry per calendar day of the batch range.
//! - An entry whose times differ from the current defaults is a *custom
//!   override*; re-deriving the schedule never discards an override for a day
//!   that is still in range.
//! - Every operation here is pure: callers own the schedule and any side
//!   effects (notifications, re-rendering) that follow a change.

/// Range expansion and override merging
pub mod derive;
/// Operations on an already derived schedule
pub mod overrides;

pub use derive::{ScheduleDerivation, days_in_range, derive_schedule};
pub use overrides::{add_or_replace_custom_date, apply_defaults_to_all, custom_schedules, reset_to_default};

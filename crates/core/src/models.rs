pub mod batch;
pub mod schedule;
pub mod time;

pub use batch::{BatchCreateRequest, ScheduleItem};
pub use schedule::{DateRange, ScheduleEntry};
pub use time::TimeOfDay;

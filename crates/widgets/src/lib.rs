//! # BatchForm Widgets
//!
//! Input behaviour of the form fields that is independent of any rendering:
//! keyboard stepping of the time field and the option list of the "select
//! date to customize" autocomplete.

pub mod autocomplete;
pub mod time_field;

pub use autocomplete::{AutocompleteOption, date_options, find_option};
pub use time_field::{TimeKey, step_time};

//! # BatchForm Payload
//!
//! Shaping of raw form payloads before they reach validation or submission.
//!
//! - **Value**: the dynamic value tree a form produces
//! - **Prune**: recursive removal of empty values
//! - **Validate**: field rules of the batch creation payload
//! - **Data URL**: parsing of `data:` URLs carrying a named, base64 file
//! - **Range**: date/time range helpers used by the range picker field

/// Base64 Data-URL parsing
pub mod data_url;
/// Deep pruning of empty values
pub mod prune;
/// Date/time range string helpers
pub mod range;
/// Batch creation payload rules
pub mod validate;
/// Dynamic form value tree
pub mod value;

pub use data_url::{DataUrl, DataUrlFile};
pub use prune::{prune_empty, prune_json};
pub use validate::{parse_payload, prepare_submission, validate_batch};
pub use value::FormValue;

use batchform_core::models::{BatchCreateRequest, TimeOfDay};
use batchform_payload::{parse_payload, validate_batch};
use batchform_schedule::derive_schedule;
use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::{debug, info};

/// What the form would send on submit.
#[derive(Debug, Serialize)]
pub struct Submission {
    pub batch: BatchCreateRequest,
    /// Days still on the default times, offered for customization.
    pub available_dates: Vec<NaiveDate>,
}

/// Runs a raw form payload through the same steps as the form: prune, derive
/// the per-day schedule from the batch range, then validate.
///
/// Derivation only runs when every submitted row converts to an entry, so an
/// incomplete row reaches validation as submitted instead of being replaced
/// by a default day.
pub fn build_submission(raw: serde_json::Value) -> Result<Submission> {
    let mut batch = parse_payload(raw).wrap_err("Failed to read batch payload")?;

    let default_start = batch.default_start_time.clone().unwrap_or_default();
    let default_end = batch.default_end_time.clone().unwrap_or_default();
    let range = batch.date_range();

    let mut available_dates = Vec::new();
    match batch.complete_schedule_entries() {
        Some(existing) => {
            let derived = derive_schedule(&range, &default_start, &default_end, &existing);
            if range.is_selected() {
                batch.set_schedule_entries(&derived.schedules);
            }
            available_dates = derived.available_dates;
        }
        None => debug!("incomplete schedule rows, skipping derivation"),
    }

    validate_batch(&batch).wrap_err("Batch payload failed validation")?;

    info!(
        days = batch.schedules.len(),
        custom = custom_count(&batch, &default_start, &default_end),
        "batch submission ready"
    );

    Ok(Submission { batch, available_dates })
}

fn custom_count(batch: &BatchCreateRequest, default_start: &TimeOfDay, default_end: &TimeOfDay) -> usize {
    batchform_schedule::custom_schedules(&batch.schedule_entries(), default_start, default_end).len()
}

use batchform_core::errors::{FieldIssue, FormError, FormResult};
use batchform_core::models::batch::parse_calendar_date;
use batchform_core::models::{BatchCreateRequest, ScheduleItem, TimeOfDay};
use serde_json::Value;
use tracing::debug;

use crate::prune::prune_json;

/// Prunes a raw form payload and reads it as a batch request, without
/// checking any field rule.
pub fn parse_payload(raw: Value) -> FormResult<BatchCreateRequest> {
    let pruned = prune_json(raw).unwrap_or_else(|| Value::Object(Default::default()));
    Ok(serde_json::from_value(pruned)?)
}

/// [`parse_payload`] followed by [`validate_batch`].
pub fn prepare_submission(raw: Value) -> FormResult<BatchCreateRequest> {
    let request = parse_payload(raw)?;
    validate_batch(&request)?;
    Ok(request)
}

/// Checks every rule of the batch creation payload and reports all failures
/// at once as [`FormError::Validation`].
pub fn validate_batch(request: &BatchCreateRequest) -> FormResult<()> {
    let mut issues = Vec::new();

    require_id(&mut issues, "branch_id", request.branch_id, "Branch Name is required");
    require_id(&mut issues, "programme_id", request.programme_id, "Programme field is required");
    require_id(&mut issues, "created_by", request.created_by, "Created By is required");

    let start_date = require_date(
        &mut issues,
        "batch_start_date",
        request.batch_start_date.as_deref(),
        "Batch Start Date is required",
    );
    let end_date = require_date(
        &mut issues,
        "batch_end_date",
        request.batch_end_date.as_deref(),
        "Batch End Date is required",
    );
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            issues.push(FieldIssue::new(
                "batch_end_date",
                "Batch End Date cannot be before Batch Start Date",
            ));
        }
    }

    require_time(&mut issues, "default_start_time", request.default_start_time.as_ref());
    require_time(&mut issues, "default_end_time", request.default_end_time.as_ref());

    if request.schedules.is_empty() {
        issues.push(FieldIssue::new("schedules", "At least one schedule is required"));
    }
    for (index, item) in request.schedules.iter().enumerate() {
        validate_schedule_item(&mut issues, index, item);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        debug!(count = issues.len(), "batch payload rejected");
        Err(FormError::Validation(issues))
    }
}

fn validate_schedule_item(issues: &mut Vec<FieldIssue>, index: usize, item: &ScheduleItem) {
    let path = |field: &str| format!("schedules.{index}.{field}");

    match item.date.as_deref() {
        None => issues.push(FieldIssue::new(path("date"), "Required")),
        Some(date) if parse_calendar_date(date).is_none() => {
            issues.push(FieldIssue::new(path("date"), "Invalid date"))
        }
        Some(_) => {}
    }

    let start_ok = require_time(issues, &path("start_time"), item.start_time.as_ref());
    let end_ok = require_time(issues, &path("end_time"), item.end_time.as_ref());

    if let (true, true, Some(start), Some(end)) = (start_ok, end_ok, &item.start_time, &item.end_time) {
        if end <= start {
            issues.push(FieldIssue::new(path("end_time"), "End time must be after start time"));
        }
    }
}

fn require_id(issues: &mut Vec<FieldIssue>, path: &str, value: Option<i64>, message: &str) {
    if !value.is_some_and(|id| id >= 1) {
        issues.push(FieldIssue::new(path, message));
    }
}

fn require_date(
    issues: &mut Vec<FieldIssue>,
    path: &str,
    value: Option<&str>,
    missing: &str,
) -> Option<chrono::NaiveDate> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        issues.push(FieldIssue::new(path, missing));
        return None;
    };
    let parsed = parse_calendar_date(value);
    if parsed.is_none() {
        issues.push(FieldIssue::new(path, "Invalid date"));
    }
    parsed
}

/// Records an issue unless `value` is a present `HH:MM` time; returns whether
/// it was.
fn require_time(issues: &mut Vec<FieldIssue>, path: &str, value: Option<&TimeOfDay>) -> bool {
    match value {
        None => {
            issues.push(FieldIssue::new(path, "Required"));
            false
        }
        Some(time) if !time.is_well_formed() => {
            issues.push(FieldIssue::new(path, "Invalid time"));
            false
        }
        Some(_) => true,
    }
}

use std::error::Error;

use base64::Engine;
use batchform_core::errors::{FieldIssue, FormError, FormResult};
use pretty_assertions::assert_eq;

#[test]
fn test_form_error_display() {
    let validation = FormError::Validation(vec![
        FieldIssue::new("branch_id", "Branch Name is required"),
        FieldIssue::new("schedules.0.end_time", "End time must be after start time"),
    ]);
    let data_url = FormError::InvalidDataUrl("missing name".to_string());
    let language = FormError::UnsupportedLanguage("xx".to_string());

    assert_eq!(
        validation.to_string(),
        "Validation error: branch_id: Branch Name is required; schedules.0.end_time: End time must be after start time"
    );
    assert_eq!(data_url.to_string(), "Invalid data URL: missing name");
    assert_eq!(language.to_string(), "Unsupported language: xx");
}

#[test]
fn test_decode_error_conversion() {
    let decode_error = base64::engine::general_purpose::STANDARD
        .decode("not base64!")
        .unwrap_err();
    let form_error: FormError = decode_error.into();

    assert!(form_error.to_string().starts_with("Decode error:"));
    assert!(form_error.source().is_some());
}

#[test]
fn test_payload_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let form_error: FormError = json_error.into();

    assert!(matches!(form_error, FormError::Payload(_)));
}

#[test]
fn test_issues_accessor() {
    let validation = FormError::Validation(vec![FieldIssue::new("schedules", "At least one schedule is required")]);
    let other = FormError::InvalidDataUrl("bad".to_string());

    assert_eq!(validation.issues().len(), 1);
    assert_eq!(validation.issues()[0].path, "schedules");
    assert!(other.issues().is_empty());
}

#[test]
fn test_form_result() {
    let result: FormResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: FormResult<i32> = Err(FormError::InvalidDataUrl("bad".to_string()));
    assert!(result.is_err());
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single validation failure, addressed by its dotted field path
/// (e.g. `schedules.2.end_time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Validation error: {}", join_issues(.0))]
    Validation(Vec<FieldIssue>),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl FormError {
    /// Issues carried by a validation failure, empty for every other variant.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            FormError::Validation(issues) => issues,
            _ => &[],
        }
    }
}

pub type FormResult<T> = Result<T, FormError>;

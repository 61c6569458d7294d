//! Request validation
//!
//! Validators are pure functions over raw input (path segments or JSON
//! bodies) that either produce a typed value or a [`ValidationErrors`] with
//! at least one human-readable issue. Messages use the wording
//! `Invalid input: expected {type}, received {type}` so clients see the same
//! text regardless of which field failed.

pub mod course;
pub mod student;

pub use course::{
    coerce_course_id, validate_course_create, validate_course_delete, validate_course_id,
    validate_course_update, NAN_COURSE_ID_MESSAGE,
};
pub use student::validate_student_id;

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Result of running a validator
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Location of the offending value, outermost field first
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Type mismatch between the schema and the received value
    pub fn invalid_type(expected: &str, received: &str) -> Self {
        Self::new(format!(
            "Invalid input: expected {}, received {}",
            expected, received
        ))
    }

    /// Prefix the path with an enclosing field name or index
    pub fn at(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// Ordered list of schema violations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn new(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        debug_assert!(!issues.is_empty(), "validation failed without issues");
        Self { issues }
    }

    /// Message of the first violation, the one surfaced to API clients
    pub fn first_message(&self) -> &str {
        self.issues
            .first()
            .map(|issue| issue.message.as_str())
            .unwrap_or("Validation failed")
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Name of the JSON type of `value`, `undefined` when the field is absent
pub(crate) fn received(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Record field-level failures under `field` and keep going
pub(crate) fn collect<T>(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    result: Result<T, Vec<ValidationIssue>>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(errors) => {
            issues.extend(errors.into_iter().map(|issue| issue.at(field)));
            None
        }
    }
}

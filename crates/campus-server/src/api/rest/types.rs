//! REST API type definitions
//!
//! Response envelope and payload types for the REST API endpoints.

use campus_core::{CourseId, StudentId};
use campus_repository::Registry;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn Registry>,
    pub banner: Arc<str>,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>, banner: impl Into<Arc<str>>) -> Self {
        Self {
            registry,
            banner: banner.into(),
        }
    }
}

/// Uniform response wrapper
///
/// `success` is always present; the other fields are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    /// Success envelope carrying `data`
    ///
    /// Serializing the domain types cannot fail, so a failure here becomes
    /// `null` rather than an error.
    pub fn with_data(message: Option<String>, data: impl Serialize) -> Self {
        Self {
            success: true,
            message,
            data: Some(serde_json::to_value(data).unwrap_or(Value::Null)),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    pub fn failure_with_errors(message: Option<&str>, errors: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.map(str::to_string),
            data: None,
            errors: Some(Value::String(errors.into())),
        }
    }
}

/// One resolved enrollment
///
/// Both fields are `None` when the student references a course that no
/// longer exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
}

/// Payload of `GET /api/v2/students/{studentId}/courses`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourses {
    pub student_id: StudentId,
    pub courses: Vec<CourseSummary>,
}

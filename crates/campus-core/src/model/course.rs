//! Course records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::validation::coerce_course_id;

/// Numeric course identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    /// Largest integer a JSON client can represent exactly (2^53 - 1)
    pub const MAX_SAFE: i64 = 9_007_199_254_740_991;

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Parses with the same coercion rules as the `/courses/{courseId}` path parameter.
impl FromStr for CourseId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(coerce_course_id(s)?)
    }
}

/// A course offered by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub course_title: String,
    pub instructors: Vec<String>,
}

impl Course {
    pub fn new(
        course_id: impl Into<CourseId>,
        course_title: impl Into<String>,
        instructors: Vec<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_title: course_title.into(),
            instructors,
        }
    }

    /// Shallow merge: fields present in `patch` overwrite, absent fields are kept.
    ///
    /// The identifier is never rewritten; callers select the record by
    /// `patch.course_id` before applying.
    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.course_title {
            self.course_title = title;
        }
        if let Some(instructors) = patch.instructors {
            self.instructors = instructors;
        }
    }
}

/// Partial course used by updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub course_id: CourseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<String>>,
}

impl CoursePatch {
    pub fn new(course_id: impl Into<CourseId>) -> Self {
        Self {
            course_id: course_id.into(),
            course_title: None,
            instructors: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.course_title = Some(title.into());
        self
    }

    pub fn with_instructors(mut self, instructors: Vec<String>) -> Self {
        self.instructors = Some(instructors);
        self
    }
}

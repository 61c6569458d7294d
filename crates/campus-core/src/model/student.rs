//! Student records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::course::CourseId;
use crate::error::CoreError;
use crate::validation::validate_student_id;

/// Nine-digit student identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Number of digits in a student identifier
    pub const LENGTH: usize = 9;

    /// Wraps an identifier without checking its format.
    ///
    /// Deserialization goes through the same path, so callers holding
    /// untrusted data should run [`validate_student_id`] instead.
    pub fn new_unchecked(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StudentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(validate_student_id(s)?)
    }
}

impl PartialEq<str> for StudentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub section: String,
    /// Enrolled course ids, in enrollment order. Entries may reference
    /// courses that no longer exist.
    #[serde(default)]
    pub courses: Vec<CourseId>,
}

impl Student {
    pub fn profile(&self) -> StudentProfile {
        StudentProfile {
            student_id: self.student_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            program: self.program.clone(),
            section: self.section.clone(),
        }
    }
}

/// Student record without enrollments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub section: String,
}

//! Data model for the registry
//!
//! Records are serialized with camelCase field names to match the JSON API.

pub mod course;
pub mod student;

pub use course::{Course, CourseId, CoursePatch};
pub use student::{Student, StudentId, StudentProfile};

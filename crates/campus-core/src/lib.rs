//! Campus Core - core types and validation for the Campus registry API
//!
//! This crate provides the fundamental types shared by the repository and
//! server crates:
//! - Student and course records
//! - Identifier newtypes
//! - The request validation layer
//! - Error types

pub mod error;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use error::CoreError;
pub use model::{Course, CourseId, CoursePatch, Student, StudentId, StudentProfile};
pub use validation::{ValidationErrors, ValidationIssue, ValidationResult};

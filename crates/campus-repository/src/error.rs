//! Error types for the repository layer

use campus_core::{CourseId, StudentId};
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No student with the given id
    #[error("Student not found: {id}")]
    StudentNotFound { id: StudentId },

    /// No course with the given id
    #[error("Course not found: {id}")]
    CourseNotFound { id: CourseId },

    /// A course with the same id is already stored
    #[error("Course already exists: {id}")]
    DuplicateCourse { id: CourseId },

    /// A student with the same id is already stored
    #[error("Student already exists: {id}")]
    DuplicateStudent { id: StudentId },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file could not be parsed
    #[error("Failed to parse seed data: {0}")]
    SeedParse(#[from] serde_yaml::Error),

    /// Seed file parsed but breaks a data invariant
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

impl RepositoryError {
    /// Whether the error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::StudentNotFound { .. } | RepositoryError::CourseNotFound { .. }
        )
    }
}

//! Core trait definitions for the repository pattern
//!
//! - [`StudentRepository`]: read access to students
//! - [`CourseRepository`]: read and write access to courses
//! - [`Registry`]: both, as one object handlers can share
//!
//! Implementations own their storage and must make every read-modify-write
//! sequence (duplicate check plus insert, lookup plus merge, lookup plus
//! removal) atomic with respect to other calls.

use async_trait::async_trait;
use campus_core::{Course, CourseId, CoursePatch, Student, StudentId};

use crate::{RepositoryError, RepositoryResult};

/// Read access to the student collection
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students in insertion order
    async fn list_students(&self) -> RepositoryResult<Vec<Student>>;

    /// Look up a student by id
    ///
    /// # Errors
    /// [`RepositoryError::StudentNotFound`] when no student has `id`.
    async fn get_student(&self, id: &StudentId) -> RepositoryResult<Student>;
}

/// Access to the course collection
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All courses in insertion order
    async fn list_courses(&self) -> RepositoryResult<Vec<Course>>;

    /// Look up a course by id
    ///
    /// # Errors
    /// [`RepositoryError::CourseNotFound`] when no course has `id`.
    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course>;

    /// Resolve several ids at once, keeping their order.
    ///
    /// Ids without a matching course resolve to `None` instead of failing.
    async fn find_courses(&self, ids: &[CourseId]) -> RepositoryResult<Vec<Option<Course>>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get_course(*id).await {
                Ok(course) => found.push(Some(course)),
                Err(RepositoryError::CourseNotFound { .. }) => found.push(None),
                Err(e) => return Err(e),
            }
        }
        Ok(found)
    }

    /// Append a new course
    ///
    /// # Errors
    /// [`RepositoryError::DuplicateCourse`] when the id is taken; the
    /// collection is left unchanged.
    async fn insert_course(&self, course: Course) -> RepositoryResult<Course>;

    /// Shallow-merge `patch` into the stored course and return the result
    ///
    /// # Errors
    /// [`RepositoryError::CourseNotFound`] when no course has `patch.course_id`.
    async fn update_course(&self, patch: CoursePatch) -> RepositoryResult<Course>;

    /// Remove a course, keeping the order of the others, and return it
    ///
    /// # Errors
    /// [`RepositoryError::CourseNotFound`] when no course has `id`.
    async fn delete_course(&self, id: CourseId) -> RepositoryResult<Course>;
}

/// Student and course access behind a single handle
pub trait Registry: StudentRepository + CourseRepository {}

impl<T: StudentRepository + CourseRepository + ?Sized> Registry for T {}

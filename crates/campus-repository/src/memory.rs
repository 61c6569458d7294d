//! In-memory repository implementation

use async_trait::async_trait;
use campus_core::{Course, CourseId, CoursePatch, Student, StudentId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::seed::SeedData;
use crate::{CourseRepository, RepositoryError, RepositoryResult, StudentRepository};

/// Repository keeping both collections in process memory
///
/// Each collection sits behind its own `RwLock`. Mutations hold the write
/// guard across the whole lookup-and-modify sequence, so concurrent requests
/// observe the same results as if they had run one after another. Contents
/// are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    students: RwLock<Vec<Student>>,
    courses: RwLock<Vec<Course>>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from seed data after checking its invariants
    ///
    /// # Errors
    /// Returns [`RepositoryError::InvalidSeed`] for malformed student ids,
    /// or a duplicate error when two records share a key.
    pub fn from_seed(seed: SeedData) -> RepositoryResult<Self> {
        seed.validate()?;
        Ok(Self::with_data(seed.students, seed.courses))
    }

    /// Create a repository from trusted data without validation
    pub fn with_data(students: Vec<Student>, courses: Vec<Course>) -> Self {
        Self {
            students: RwLock::new(students),
            courses: RwLock::new(courses),
        }
    }
}

#[async_trait]
impl StudentRepository for MemoryRepository {
    async fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        Ok(self.students.read().await.clone())
    }

    async fn get_student(&self, id: &StudentId) -> RepositoryResult<Student> {
        self.students
            .read()
            .await
            .iter()
            .find(|student| student.student_id == *id)
            .cloned()
            .ok_or_else(|| RepositoryError::StudentNotFound { id: id.clone() })
    }
}

#[async_trait]
impl CourseRepository for MemoryRepository {
    async fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.courses.read().await.clone())
    }

    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course> {
        self.courses
            .read()
            .await
            .iter()
            .find(|course| course.course_id == id)
            .cloned()
            .ok_or(RepositoryError::CourseNotFound { id })
    }

    async fn find_courses(&self, ids: &[CourseId]) -> RepositoryResult<Vec<Option<Course>>> {
        let courses = self.courses.read().await;
        Ok(ids
            .iter()
            .map(|id| courses.iter().find(|course| course.course_id == *id).cloned())
            .collect())
    }

    async fn insert_course(&self, course: Course) -> RepositoryResult<Course> {
        let mut courses = self.courses.write().await;
        if courses.iter().any(|c| c.course_id == course.course_id) {
            return Err(RepositoryError::DuplicateCourse {
                id: course.course_id,
            });
        }
        courses.push(course.clone());
        debug!("Inserted course {} ({} total)", course.course_id, courses.len());
        Ok(course)
    }

    async fn update_course(&self, patch: CoursePatch) -> RepositoryResult<Course> {
        let mut courses = self.courses.write().await;
        let id = patch.course_id;
        let course = courses
            .iter_mut()
            .find(|course| course.course_id == id)
            .ok_or(RepositoryError::CourseNotFound { id })?;
        course.apply(patch);
        debug!("Updated course {}", id);
        Ok(course.clone())
    }

    async fn delete_course(&self, id: CourseId) -> RepositoryResult<Course> {
        let mut courses = self.courses.write().await;
        let index = courses
            .iter()
            .position(|course| course.course_id == id)
            .ok_or(RepositoryError::CourseNotFound { id })?;
        let removed = courses.remove(index);
        debug!("Deleted course {} ({} remaining)", id, courses.len());
        Ok(removed)
    }
}

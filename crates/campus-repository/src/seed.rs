//! Initial dataset loading
//!
//! The registry starts from a seed: either the built-in dataset or a YAML
//! file (JSON works too, YAML being a superset). A seed file looks like:
//!
//! ```yaml
//! students:
//!   - studentId: "650610001"
//!     firstName: Matt
//!     lastName: Damon
//!     program: CPE
//!     section: "801"
//!     courses: [261207, 261497]
//! courses:
//!   - courseId: 261207
//!     courseTitle: Basic Computer Engineering Lab
//!     instructors: [Dome Potikanond, Chinawat Isradisaikul]
//! ```

use campus_core::validation::validate_student_id;
use campus_core::{Course, Student, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{RepositoryError, RepositoryResult};

/// Students and courses to start from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl SeedData {
    /// Parse seed content in YAML or JSON form
    pub fn parse(content: &str) -> RepositoryResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a seed file
    pub async fn load(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::parse(&content)
    }

    /// Check key formats and uniqueness
    pub fn validate(&self) -> RepositoryResult<()> {
        let mut student_ids = HashSet::new();
        for student in &self.students {
            validate_student_id(student.student_id.as_str()).map_err(|e| {
                RepositoryError::InvalidSeed(format!(
                    "student {}: {}",
                    student.student_id,
                    e.first_message()
                ))
            })?;
            if !student_ids.insert(&student.student_id) {
                return Err(RepositoryError::DuplicateStudent {
                    id: student.student_id.clone(),
                });
            }
        }

        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.course_id) {
                return Err(RepositoryError::DuplicateCourse {
                    id: course.course_id,
                });
            }
        }

        Ok(())
    }

    /// Dataset used when no seed file is configured
    pub fn builtin() -> Self {
        let course = |id: i64, title: &str, instructors: &[&str]| {
            Course::new(
                id,
                title,
                instructors.iter().map(|name| name.to_string()).collect(),
            )
        };
        let student = |id: &str, first: &str, last: &str, section: &str, courses: &[i64]| Student {
            student_id: StudentId::new_unchecked(id.to_string()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            program: "CPE".to_string(),
            section: section.to_string(),
            courses: courses.iter().copied().map(Into::into).collect(),
        };

        Self {
            students: vec![
                student("650610001", "Matt", "Damon", "801", &[261207, 261497]),
                student("650610002", "Cillian", "Murphy", "801", &[261207, 261497, 269101]),
                student("650610003", "Emily", "Blunt", "801", &[261497]),
                student("670610722", "Bhumiphat", "Likittrakulwong", "001", &[261207, 261497]),
            ],
            courses: vec![
                course(
                    261207,
                    "Basic Computer Engineering Lab",
                    &["Dome Potikanond", "Chinawat Isradisaikul"],
                ),
                course(
                    261497,
                    "Full Stack Development",
                    &["Dome Potikanond", "Chinawat Isradisaikul"],
                ),
                course(
                    269101,
                    "Introduction to Information Technology",
                    &["Patiwet Wuttisarnwattana"],
                ),
            ],
        }
    }
}

/// Where the initial dataset comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// Built-in dataset
    #[default]
    Builtin,
    /// YAML or JSON file on disk
    File(PathBuf),
}

impl SeedSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(SeedSource::File).unwrap_or_default()
    }

    /// Load and validate the dataset
    pub async fn load(&self) -> RepositoryResult<SeedData> {
        let seed = match self {
            SeedSource::Builtin => SeedData::builtin(),
            SeedSource::File(path) => {
                info!("Loading seed data from {}", path.display());
                SeedData::load(path).await?
            }
        };
        seed.validate()?;
        info!(
            "Seed data ready: {} students, {} courses",
            seed.students.len(),
            seed.courses.len()
        );
        Ok(seed)
    }
}

//! Unit tests for RepositoryError types and error handling

use campus_core::{CourseId, StudentId};
use campus_repository::RepositoryError;

#[test]
fn test_error_student_not_found_display() {
    let error = RepositoryError::StudentNotFound {
        id: StudentId::new_unchecked("650610099".to_string()),
    };

    assert_eq!(error.to_string(), "Student not found: 650610099");
    assert!(error.is_not_found());
}

#[test]
fn test_error_course_not_found_display() {
    let error = RepositoryError::CourseNotFound {
        id: CourseId::new(261999),
    };

    assert_eq!(error.to_string(), "Course not found: 261999");
    assert!(error.is_not_found());
}

#[test]
fn test_error_duplicate_course_display() {
    let error = RepositoryError::DuplicateCourse {
        id: CourseId::new(261207),
    };

    assert_eq!(error.to_string(), "Course already exists: 261207");
    assert!(!error.is_not_found());
}

#[test]
fn test_error_invalid_seed_display() {
    let error = RepositoryError::InvalidSeed("student 12: too short".to_string());

    assert_eq!(error.to_string(), "Invalid seed data: student 12: too short");
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: RepositoryError = io_err.into();

    assert!(matches!(error, RepositoryError::Io(_)));
    assert!(error.to_string().contains("I/O error"));
}

#[test]
fn test_error_from_yaml() {
    let yaml_err = serde_yaml::from_str::<Vec<String>>("key: [unclosed").unwrap_err();
    let error: RepositoryError = yaml_err.into();

    assert!(matches!(error, RepositoryError::SeedParse(_)));
    assert!(error.to_string().starts_with("Failed to parse seed data"));
}

//! Unit tests for the data model and validation layer
//!
//! Exercises the public API the repository and server crates rely on.

use campus_core::validation::{
    coerce_course_id, validate_course_create, validate_course_delete, validate_course_update,
    validate_student_id, NAN_COURSE_ID_MESSAGE,
};
use campus_core::{Course, CourseId, CoreError, Student};
use serde_json::json;

// =============================================================================
// Model Tests
// =============================================================================

#[test]
fn test_student_round_trips_api_shape() {
    let body = json!({
        "studentId": "670610722",
        "firstName": "Bhumiphat",
        "lastName": "Likittrakulwong",
        "program": "CPE",
        "section": "001",
        "courses": [261207, 261497]
    });

    let student: Student = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(student.courses, vec![CourseId::new(261207), CourseId::new(261497)]);
    assert_eq!(serde_json::to_value(&student).unwrap(), body);
}

#[test]
fn test_update_patch_applies_as_shallow_merge() {
    let mut course = Course::new(
        261207,
        "Basic Computer Engineering Lab",
        vec!["Dome Potikanond".to_string(), "Chinawat Isradisaikul".to_string()],
    );

    let patch = validate_course_update(&json!({
        "courseId": 261207,
        "courseTitle": "Computer Engineering Lab I"
    }))
    .unwrap();
    course.apply(patch);

    assert_eq!(course.course_title, "Computer Engineering Lab I");
    assert_eq!(course.instructors.len(), 2);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_created_course_keeps_all_fields() -> anyhow::Result<()> {
    let body = json!({
        "courseId": 101,
        "courseTitle": "Algorithms",
        "instructors": ["A. Turing"]
    });

    let course = validate_course_create(&body)?;
    assert_eq!(serde_json::to_value(&course)?, body);
    Ok(())
}

#[test]
fn test_path_course_id_nan_message() {
    let err = coerce_course_id("abc").unwrap_err();
    assert_eq!(err.first_message(), NAN_COURSE_ID_MESSAGE);
    assert_eq!(
        NAN_COURSE_ID_MESSAGE,
        "Invalid input: expected number, received NaN"
    );
}

#[test]
fn test_mistyped_course_id_in_body() {
    let err = validate_course_delete(&json!({ "courseId": "101" })).unwrap_err();
    assert_eq!(
        err.first_message(),
        "Invalid input: expected number, received string"
    );
}

#[test]
fn test_student_id_errors_convert_to_core_error() {
    let err: CoreError = validate_student_id("abc").unwrap_err().into();
    assert!(matches!(err, CoreError::InvalidIdentifier(_)));
    assert!(err.to_string().starts_with("Invalid identifier"));
}

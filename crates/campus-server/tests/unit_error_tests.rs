//! Unit tests for ServerError responses

use axum::{http::StatusCode, response::IntoResponse};
use campus_core::validation::{coerce_course_id, validate_course_create, validate_student_id};
use campus_core::{CourseId, StudentId};
use campus_repository::RepositoryError;
use campus_server::error::{ServerError, INTERNAL_ERROR_MESSAGE, VALIDATION_FAILED_MESSAGE};
use http_body_util::BodyExt;
use serde_json::{json, Value};

async fn render(err: ServerError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_student_id_validation_response() {
    let err: ServerError = validate_student_id("1234").unwrap_err().into();
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": VALIDATION_FAILED_MESSAGE,
            "errors": "Student Id must contain 9 characters"
        })
    );
}

#[tokio::test]
async fn test_course_id_nan_response() {
    let err: ServerError = coerce_course_id("abc").unwrap_err().into();
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], "Invalid input: expected number, received NaN");
}

#[tokio::test]
async fn test_create_body_reports_first_issue() {
    let err: ServerError = validate_course_create(&json!({"courseTitle": 5}))
        .unwrap_err()
        .into();
    let (_, body) = render(err).await;

    assert_eq!(
        body["errors"],
        "Invalid input: expected number, received undefined"
    );
}

#[tokio::test]
async fn test_not_found_responses() {
    let err: ServerError = RepositoryError::StudentNotFound {
        id: StudentId::new_unchecked("650610099".to_string()),
    }
    .into();
    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "message": "Student does not exists"})
    );

    let err: ServerError = RepositoryError::CourseNotFound {
        id: CourseId::new(1),
    }
    .into();
    let (_, body) = render(err).await;
    assert_eq!(body["message"], "Course does not exists");
}

#[tokio::test]
async fn test_conflict_response() {
    let err: ServerError = RepositoryError::DuplicateCourse {
        id: CourseId::new(101),
    }
    .into();
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Course Id already exists");
}

#[tokio::test]
async fn test_io_error_becomes_generic_500() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let err: ServerError = RepositoryError::from(io).into();
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": INTERNAL_ERROR_MESSAGE})
    );
}

//! API endpoint handlers
//!
//! HTTP request handlers for the health banner and the course endpoints.

use super::extractors::{CourseIdPath, JsonBody, StudentIdPath};
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use campus_core::validation::{
    validate_course_create, validate_course_delete, validate_course_update,
};
use campus_core::CourseId;
use campus_repository::RepositoryError;
use tracing::{debug, info};

type HandlerResult<T> = Result<T, ServerError>;

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<Envelope> {
    Json(Envelope::success(state.banner.to_string()))
}

/// List every student
pub(super) async fn list_students(State(state): State<AppState>) -> HandlerResult<Json<Envelope>> {
    let students = state.registry.list_students().await?;
    Ok(Json(Envelope::with_data(None, students)))
}

/// List every course
pub(super) async fn list_courses(State(state): State<AppState>) -> HandlerResult<Json<Envelope>> {
    let courses = state.registry.list_courses().await?;
    Ok(Json(Envelope::with_data(None, courses)))
}

/// Courses a student is enrolled in
pub(super) async fn student_courses(
    State(state): State<AppState>,
    StudentIdPath(student_id): StudentIdPath,
) -> HandlerResult<impl IntoResponse> {
    let student = state.registry.get_student(&student_id).await?;

    let courses = state
        .registry
        .find_courses(&student.courses)
        .await?
        .into_iter()
        .map(|course| match course {
            Some(course) => CourseSummary {
                course_id: Some(course.course_id),
                course_title: Some(course.course_title),
            },
            None => CourseSummary::default(),
        })
        .collect();

    let message = format!("Get courses detail of student {}", student_id);
    let link = format!("/students/{}/courses", student_id);
    let data = StudentCourses {
        student_id,
        courses,
    };

    Ok((link_header(&link)?, Json(Envelope::with_data(Some(message), data))))
}

/// Single course by id
///
/// The message and `Link` header carry the coerced id, so `/courses/0261207`
/// links to `/courses/261207` rather than echoing the raw segment.
pub(super) async fn get_course(
    State(state): State<AppState>,
    CourseIdPath(course_id): CourseIdPath,
) -> HandlerResult<impl IntoResponse> {
    let course = state.registry.get_course(course_id).await?;

    let message = format!("Get courses {} successfully", course_id);
    Ok((
        course_link(course_id)?,
        Json(Envelope::with_data(Some(message), course)),
    ))
}

/// Create a course
pub(super) async fn create_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> HandlerResult<impl IntoResponse> {
    let course = validate_course_create(&body)?;
    let course = state.registry.insert_course(course).await?;
    info!("Course {} created", course.course_id);

    let message = format!("Course {} has been added successfully", course.course_id);
    Ok((
        course_link(course.course_id)?,
        Json(Envelope::with_data(Some(message), course)),
    ))
}

/// Shallow-merge fields into an existing course
pub(super) async fn update_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> HandlerResult<impl IntoResponse> {
    let patch = validate_course_update(&body)?;
    let course = state
        .registry
        .update_course(patch)
        .await
        .map_err(unknown_course_id)?;
    info!("Course {} updated", course.course_id);

    let message = format!("course {} has been updated successfully", course.course_id);
    Ok((
        course_link(course.course_id)?,
        Json(Envelope::with_data(Some(message), course)),
    ))
}

/// Remove a course
pub(super) async fn delete_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> HandlerResult<Json<Envelope>> {
    let course_id = validate_course_delete(&body)?;
    let course = state
        .registry
        .delete_course(course_id)
        .await
        .map_err(unknown_course_id)?;
    info!("Course {} deleted", course.course_id);

    let message = format!("Course {} has been deleted successfully", course.course_id);
    Ok(Json(Envelope::with_data(Some(message), course)))
}

/// Fallback for unmatched routes
pub(super) async fn not_found() -> ServerError {
    ServerError::NotFound("Route not found".to_string())
}

/// Mutations name the body field in their not-found message
fn unknown_course_id(err: RepositoryError) -> ServerError {
    match err {
        RepositoryError::CourseNotFound { id } => {
            debug!("Course {} not found", id);
            ServerError::NotFound("Course Id does not exists".to_string())
        }
        other => other.into(),
    }
}

fn course_link(id: CourseId) -> HandlerResult<[(header::HeaderName, HeaderValue); 1]> {
    link_header(&format!("/courses/{}", id))
}

fn link_header(path: &str) -> HandlerResult<[(header::HeaderName, HeaderValue); 1]> {
    let value = HeaderValue::from_str(path)
        .map_err(|e| ServerError::Internal(format!("invalid Link header {:?}: {}", path, e)))?;
    Ok([(header::LINK, value)])
}

//! Custom extractors
//!
//! Provides a lenient JSON body extractor and validated path identifiers,
//! all of which report failures through the response envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use campus_core::validation::student::DIGITS_MESSAGE;
use campus_core::validation::{coerce_course_id, validate_student_id, NAN_COURSE_ID_MESSAGE};
use campus_core::{CourseId, StudentId, ValidationErrors, ValidationIssue};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ServerError;

/// Request body as untyped JSON, ready for schema validation
///
/// A body without a JSON content type, or an empty one, reads as `{}` so the
/// validators report the missing fields. Malformed JSON is rejected with
/// [`ServerError::InvalidJson`].
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

#[axum::async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::InvalidJson(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ServerError::InvalidJson(e.to_string()))
    }
}

/// `courseId` path segment coerced to a [`CourseId`]
///
/// A segment that cannot be decoded reads as not-a-number, so every failure
/// carries [`NAN_COURSE_ID_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseIdPath(pub CourseId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CourseIdPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = path_segment(parts, state, NAN_COURSE_ID_MESSAGE).await?;
        Ok(Self(coerce_course_id(&raw)?))
    }
}

/// `studentId` path segment checked against the student id schema
///
/// A segment that cannot be decoded fails the digit rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdPath(pub StudentId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for StudentIdPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = path_segment(parts, state, DIGITS_MESSAGE).await?;
        Ok(Self(validate_student_id(&raw)?))
    }
}

/// Single path parameter, with decoding failures reported as `message`
async fn path_segment<S>(parts: &mut Parts, state: &S, message: &str) -> Result<String, ServerError>
where
    S: Send + Sync,
{
    Path::<String>::from_request_parts(parts, state)
        .await
        .map(|Path(raw)| raw)
        .map_err(|rejection| {
            debug!("Rejected path parameter: {}", rejection.body_text());
            ValidationErrors::new(ValidationIssue::new(message)).into()
        })
}

fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(json_content_type(&headers("application/json")));
        assert!(json_content_type(&headers("application/json; charset=utf-8")));
        assert!(json_content_type(&headers("application/merge-patch+json")));
        assert!(!json_content_type(&headers("text/plain")));
        assert!(!json_content_type(&HeaderMap::new()));
    }
}

//! Course identifier and course body schemas

use serde_json::{Map, Number, Value};

use super::{collect, received, ValidationErrors, ValidationIssue, ValidationResult};
use crate::model::{Course, CourseId, CoursePatch};

const COURSE_ID: &str = "courseId";
const COURSE_TITLE: &str = "courseTitle";
const INSTRUCTORS: &str = "instructors";

/// Returned when a `courseId` path segment does not coerce to a number
pub const NAN_COURSE_ID_MESSAGE: &str = "Invalid input: expected number, received NaN";

const NOT_AN_INT_MESSAGE: &str = "Invalid input: expected int, received number";

type FieldResult<T> = Result<T, Vec<ValidationIssue>>;

/// Validate a JSON value as a course identifier
pub fn validate_course_id(value: &Value) -> ValidationResult<CourseId> {
    course_id_field(Some(value)).map_err(ValidationErrors::from_issues)
}

/// Coerce a path segment to a course identifier.
///
/// Decimal, exponent and `0x`/`0o`/`0b` forms are accepted, surrounding
/// whitespace is ignored and an empty segment reads as zero. Every failure,
/// including a fractional or out-of-range number, yields the single
/// [`NAN_COURSE_ID_MESSAGE`] issue.
pub fn coerce_course_id(raw: &str) -> ValidationResult<CourseId> {
    integral(coerce_number(raw))
        .ok_or_else(|| ValidationErrors::new(ValidationIssue::new(NAN_COURSE_ID_MESSAGE)))
}

/// Validate a full course for creation
pub fn validate_course_create(body: &Value) -> ValidationResult<Course> {
    let obj = as_object(body)?;
    let mut issues = Vec::new();

    let course_id = collect(&mut issues, COURSE_ID, course_id_field(obj.get(COURSE_ID)));
    let title = collect(&mut issues, COURSE_TITLE, string_field(obj.get(COURSE_TITLE)));
    let instructors = collect(
        &mut issues,
        INSTRUCTORS,
        string_array_field(obj.get(INSTRUCTORS)),
    );

    match (course_id, title, instructors) {
        (Some(course_id), Some(course_title), Some(instructors)) => Ok(Course {
            course_id,
            course_title,
            instructors,
        }),
        _ => Err(ValidationErrors::from_issues(issues)),
    }
}

/// Validate a partial course for update; only `courseId` is required
pub fn validate_course_update(body: &Value) -> ValidationResult<CoursePatch> {
    let obj = as_object(body)?;
    let mut issues = Vec::new();

    let course_id = collect(&mut issues, COURSE_ID, course_id_field(obj.get(COURSE_ID)));
    let title = collect(
        &mut issues,
        COURSE_TITLE,
        optional(obj.get(COURSE_TITLE), string_field),
    );
    let instructors = collect(
        &mut issues,
        INSTRUCTORS,
        optional(obj.get(INSTRUCTORS), string_array_field),
    );

    match (course_id, title, instructors) {
        (Some(course_id), Some(course_title), Some(instructors)) => Ok(CoursePatch {
            course_id,
            course_title,
            instructors,
        }),
        _ => Err(ValidationErrors::from_issues(issues)),
    }
}

/// Validate a delete body; everything but `courseId` is ignored
pub fn validate_course_delete(body: &Value) -> ValidationResult<CourseId> {
    let obj = as_object(body)?;
    course_id_field(obj.get(COURSE_ID))
        .map_err(|issues| {
            issues
                .into_iter()
                .map(|issue| issue.at(COURSE_ID))
                .collect()
        })
        .map_err(ValidationErrors::from_issues)
}

fn as_object(body: &Value) -> ValidationResult<&Map<String, Value>> {
    body.as_object().ok_or_else(|| {
        ValidationErrors::new(ValidationIssue::invalid_type(
            "object",
            received(Some(body)),
        ))
    })
}

fn optional<T>(
    value: Option<&Value>,
    field: impl Fn(Option<&Value>) -> FieldResult<T>,
) -> FieldResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(_) => field(value).map(Some),
    }
}

fn course_id_field(value: Option<&Value>) -> FieldResult<CourseId> {
    match value {
        Some(Value::Number(number)) => {
            json_integral(number).ok_or_else(|| vec![ValidationIssue::new(NOT_AN_INT_MESSAGE)])
        }
        other => Err(vec![ValidationIssue::invalid_type(
            "number",
            received(other),
        )]),
    }
}

fn string_field(value: Option<&Value>) -> FieldResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(vec![ValidationIssue::invalid_type(
            "string",
            received(other),
        )]),
    }
}

fn string_array_field(value: Option<&Value>) -> FieldResult<Vec<String>> {
    let items = match value {
        Some(Value::Array(items)) => items,
        other => {
            return Err(vec![ValidationIssue::invalid_type(
                "array",
                received(other),
            )])
        }
    };

    let mut issues = Vec::new();
    let mut strings = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => strings.push(s.clone()),
            other => issues.push(
                ValidationIssue::invalid_type("string", received(Some(other)))
                    .at(index.to_string()),
            ),
        }
    }

    if issues.is_empty() {
        Ok(strings)
    } else {
        Err(issues)
    }
}

fn json_integral(number: &Number) -> Option<CourseId> {
    match number.as_i64() {
        Some(i) if (-CourseId::MAX_SAFE..=CourseId::MAX_SAFE).contains(&i) => {
            Some(CourseId::new(i))
        }
        Some(_) => None,
        None => number.as_f64().and_then(integral),
    }
}

fn integral(number: f64) -> Option<CourseId> {
    let in_range = number.abs() <= CourseId::MAX_SAFE as f64;
    if number.is_finite() && number.fract() == 0.0 && in_range {
        Some(CourseId::new(number as i64))
    } else {
        None
    }
}

fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::INFINITY);
        }
    }

    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust also parses "inf" and "NaN"; restrict to decimal notation
        _ if s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) =>
        {
            s.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

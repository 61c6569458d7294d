//! Student identifier schema

use super::{ValidationErrors, ValidationIssue, ValidationResult};
use crate::model::StudentId;

pub const LENGTH_MESSAGE: &str = "Student Id must contain 9 characters";
pub const DIGITS_MESSAGE: &str = "Student Id must contain only digits";

/// Validate a raw student identifier such as a path segment
pub fn validate_student_id(raw: &str) -> ValidationResult<StudentId> {
    // Counts scalar values, not UTF-16 units; the two only differ for
    // non-ASCII input, which the digit rule rejects either way.
    if raw.chars().count() != StudentId::LENGTH {
        return Err(ValidationErrors::new(ValidationIssue::new(LENGTH_MESSAGE)));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationErrors::new(ValidationIssue::new(DIGITS_MESSAGE)));
    }
    Ok(StudentId::new_unchecked(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_student_id() {
        let id = validate_student_id("670610722").unwrap();
        assert_eq!(id.as_str(), "670610722");
    }

    #[test]
    fn test_wrong_length() {
        for raw in ["", "12345678", "1234567890"] {
            let err = validate_student_id(raw).unwrap_err();
            assert_eq!(err.first_message(), LENGTH_MESSAGE, "input: {:?}", raw);
        }
    }

    #[test]
    fn test_non_digit() {
        let err = validate_student_id("67061072a").unwrap_err();
        assert_eq!(err.first_message(), DIGITS_MESSAGE);
    }

    #[test]
    fn test_multibyte_counts_characters() {
        // nine characters, more than nine bytes
        let err = validate_student_id("ๆ12345678").unwrap_err();
        assert_eq!(err.first_message(), DIGITS_MESSAGE);
    }
}

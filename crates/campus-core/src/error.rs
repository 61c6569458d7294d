//! Error types for Campus Core

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::InvalidIdentifier(errors.first_message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

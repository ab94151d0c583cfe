//! Domain failure type.
//!
//! # Responsibility
//! - Carry every validation error that made a domain state invalid.
//!
//! # Invariants
//! - A `DomainError` built from validation always lists at least the errors
//!   it was created with, in append order.

use crate::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure raised when domain state breaks one or more validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    message: String,
    errors: Vec<ValidationError>,
}

impl DomainError {
    /// Builds an error from a single validation error.
    ///
    /// The error message is the validation error's message.
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// Builds an error from an ordered list of validation errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(ValidationError::message)
            .collect::<Vec<_>>()
            .join("; ");
        Self { message, errors }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Validation errors in the order they were reported.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "domain validation failed")
        } else {
            write!(f, "domain validation failed: {}", self.message)
        }
    }
}

impl Error for DomainError {}

//! Validation contracts shared by every domain entity.
//!
//! # Responsibility
//! - Define the error carrier reported by validation rules.
//! - Define the handler capability that decides whether errors accumulate
//!   or fail immediately.
//!
//! # Invariants
//! - Entity mutations never validate; validation only runs when a caller
//!   hands a handler to an entity's `validate`.
//! - A handler reports failure by returning `Err(DomainError)`, never by
//!   panicking.

pub mod handler;

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use handler::{Notification, ThrowsValidationHandler};

/// Failure returned by a validation step run through
/// [`ValidationHandler::validate`].
pub type StepError = Box<dyn Error + Send + Sync>;
pub type StepResult = Result<(), StepError>;

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ValidationError {}

/// Reporting strategy for validation errors.
///
/// Implementations either collect errors for later inspection
/// ([`Notification`]) or fail on the first one
/// ([`ThrowsValidationHandler`]).
pub trait ValidationHandler {
    /// Reports one validation error.
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    /// Reports every error currently held by `other`.
    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()>;

    /// Runs a validation step, turning a step failure into validation
    /// errors reported through this handler.
    fn validate(&mut self, step: &mut dyn FnMut() -> StepResult) -> DomainResult<()>;

    /// Errors held by this handler, in append order.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Rule set bound to one entity state and one handler.
pub trait Validator {
    /// Checks every rule, reporting violations through the bound handler.
    ///
    /// # Errors
    /// - Returns `Err` only when the bound handler fails fast.
    fn validate(&mut self) -> DomainResult<()>;
}

/// Converts a failed step into the validation errors it stands for.
///
/// A `DomainError` keeps its own error list; any other failure becomes a
/// single error carrying its display text.
pub(crate) fn step_failure_errors(failure: StepError) -> Vec<ValidationError> {
    match failure.downcast::<DomainError>() {
        Ok(domain) => domain.into_errors(),
        Err(other) => vec![ValidationError::new(other.to_string())],
    }
}

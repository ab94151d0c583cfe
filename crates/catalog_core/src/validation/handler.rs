//! Concrete validation handlers.
//!
//! # Responsibility
//! - `Notification`: accumulate every reported error, never fail.
//! - `ThrowsValidationHandler`: fail with a `DomainError` on the first
//!   reported error.

use super::{step_failure_errors, StepResult, ValidationError, ValidationHandler};
use crate::error::{DomainError, DomainResult};

/// Accumulating handler.
///
/// Every method returns `Ok`; callers inspect `has_errors()` afterwards or
/// convert with [`Notification::into_result`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    /// Creates an empty notification.
    pub fn create() -> Self {
        Self::default()
    }

    /// Creates a notification already holding `error`.
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Returns `Ok(())` when empty, otherwise every collected error as one
    /// `DomainError`.
    pub fn into_result(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::with_errors(self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate(&mut self, step: &mut dyn FnMut() -> StepResult) -> DomainResult<()> {
        if let Err(failure) = step() {
            self.errors.extend(step_failure_errors(failure));
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Fail-fast handler.
///
/// Holds no state: any reported error is returned immediately as a
/// `DomainError`, so `errors()` is always empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrowsValidationHandler;

impl ThrowsValidationHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        Err(DomainError::with_errors(vec![error]))
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        Err(DomainError::with_errors(other.errors().to_vec()))
    }

    fn validate(&mut self, step: &mut dyn FnMut() -> StepResult) -> DomainResult<()> {
        match step() {
            Ok(()) => Ok(()),
            Err(failure) => Err(DomainError::with_errors(step_failure_errors(failure))),
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

//! Field rules for `Category`.

use crate::error::DomainResult;
use crate::model::category::Category;
use crate::validation::{ValidationError, ValidationHandler, Validator};

/// Inclusive upper bound for a trimmed category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;
/// Inclusive lower bound for a trimmed category name, in characters.
pub const NAME_MIN_LENGTH: usize = 3;

const NAME_NULL_MESSAGE: &str = "'name' should not be null";
const NAME_EMPTY_MESSAGE: &str = "'name' should not be empty";
// Message wording is part of the public error contract; the bounds checked
// are NAME_MIN_LENGTH..=NAME_MAX_LENGTH.
const NAME_LENGTH_MESSAGE: &str = "'name' must be between 2 and 255 characters";

/// Validates one category state against a handler.
///
/// At most one error is reported per `validate()` call: the name checks are
/// mutually exclusive.
pub struct CategoryValidator<'a, 'h> {
    category: &'a Category,
    handler: &'h mut dyn ValidationHandler,
}

impl<'a, 'h> CategoryValidator<'a, 'h> {
    pub fn new(category: &'a Category, handler: &'h mut dyn ValidationHandler) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> DomainResult<()> {
        let category = self.category;
        let name = match category.name() {
            Some(name) => name,
            None => return self.handler.append(ValidationError::new(NAME_NULL_MESSAGE)),
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self.handler.append(ValidationError::new(NAME_EMPTY_MESSAGE));
        }

        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            return self
                .handler
                .append(ValidationError::new(NAME_LENGTH_MESSAGE));
        }

        Ok(())
    }
}

impl Validator for CategoryValidator<'_, '_> {
    fn validate(&mut self) -> DomainResult<()> {
        self.check_name_constraints()
    }
}

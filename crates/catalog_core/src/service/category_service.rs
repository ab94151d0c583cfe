//! Category use-case service.
//!
//! # Responsibility
//! - Provide create/update/activate/deactivate entry points that return only
//!   valid category states.
//! - Emit metadata-only diagnostics for each use-case outcome.
//!
//! # Invariants
//! - Every returned category has passed `Category::validate` with an
//!   accumulating handler.
//! - Rejections report every collected validation error at once.
//! - Category names and descriptions are never logged.

use crate::error::DomainResult;
use crate::model::category::Category;
use crate::validation::Notification;
use log::{info, warn};

/// Input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: String,
    pub active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: Option<&str>, description: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.map(str::to_string),
            description: description.into(),
            active,
        }
    }
}

/// Input for replacing a category's editable fields.
///
/// Same shape as creation: `update` uses full replacement semantics.
pub type UpdateCategoryCommand = CreateCategoryCommand;

/// Use-case service for category lifecycle operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// Creates a new category and validates it.
    ///
    /// # Errors
    /// - Returns every validation error of the new state as one
    ///   `DomainError`.
    pub fn create_category(&self, command: &CreateCategoryCommand) -> DomainResult<Category> {
        let category = Category::new_category(
            command.name.as_deref(),
            command.description.as_str(),
            command.active,
        );
        checked("category_create", category)
    }

    /// Replaces name, description and active flag of `category`.
    ///
    /// # Errors
    /// - Returns every validation error of the updated state as one
    ///   `DomainError`; `category` itself is left unchanged.
    pub fn update_category(
        &self,
        category: &Category,
        command: &UpdateCategoryCommand,
    ) -> DomainResult<Category> {
        let updated = category.update(
            command.name.as_deref(),
            command.description.as_str(),
            command.active,
        );
        checked("category_update", updated)
    }

    pub fn activate_category(&self, category: &Category) -> DomainResult<Category> {
        checked("category_activate", category.activate())
    }

    /// Soft-deletes `category`.
    pub fn deactivate_category(&self, category: &Category) -> DomainResult<Category> {
        checked("category_deactivate", category.deactivate())
    }
}

fn checked(event: &'static str, category: Category) -> DomainResult<Category> {
    let mut notification = Notification::create();
    category.validate(&mut notification)?;

    notification.into_result().inspect_err(|err| {
        warn!(
            "event={} module=service status=rejected id={} error_count={}",
            event,
            category.id(),
            err.errors().len()
        );
    })?;

    info!(
        "event={} module=service status=ok id={} active={}",
        event,
        category.id(),
        category.is_active()
    );
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::{CategoryService, CreateCategoryCommand};

    #[test]
    fn create_returns_validated_category() {
        let service = CategoryService::new();
        let category = service
            .create_category(&CreateCategoryCommand::new(
                Some("Filmes"),
                "A categoria mais assistida",
                true,
            ))
            .expect("valid command should create");

        assert_eq!(category.name(), Some("Filmes"));
        assert!(category.is_active());
    }

    #[test]
    fn create_rejects_blank_name_with_single_error() {
        let service = CategoryService::new();
        let err = service
            .create_category(&CreateCategoryCommand::new(Some("   "), "", true))
            .unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message(), "'name' should not be empty");
    }
}

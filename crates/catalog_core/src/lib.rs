//! Core domain logic for the catalog admin.
//! This crate is the single source of truth for category invariants and
//! validation rules.

pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::category::{Category, CategoryId};
pub use model::category_validator::{CategoryValidator, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
pub use model::search::CategorySearchParams;
pub use service::category_service::{
    CategoryService, CreateCategoryCommand, UpdateCategoryCommand,
};
pub use validation::{
    Notification, StepError, StepResult, ThrowsValidationHandler, ValidationError,
    ValidationHandler, Validator,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

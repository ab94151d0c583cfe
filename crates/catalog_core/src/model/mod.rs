//! Catalog domain model.
//!
//! # Responsibility
//! - Define the catalog entities and the field rules they are checked
//!   against.
//! - Define query descriptors consumed by list/search use cases.
//!
//! # Invariants
//! - Every entity keeps a stable `Uuid` identity across transitions.
//! - Deletion is represented by soft-delete tombstones (`deleted_at`), not
//!   removal.

pub mod category;
pub mod category_validator;
pub mod search;

//! Category domain model.
//!
//! # Responsibility
//! - Define the catalog category entity and its lifecycle transitions.
//! - Delegate field rules to `CategoryValidator` on explicit request.
//!
//! # Invariants
//! - `id` and `created_at` never change across transitions.
//! - `deleted_at` is set exactly when `active` is false.
//! - `updated_at` strictly increases with every transition, saturating at
//!   the latest representable instant.
//! - Transitions never validate; invalid field values are stored as given.

use crate::error::{DomainError, DomainResult};
use crate::model::category_validator::CategoryValidator;
use crate::validation::{Notification, ValidationError, ValidationHandler, Validator};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a category.
pub type CategoryId = Uuid;

/// Catalog category.
///
/// Transitions (`update`, `activate`, `deactivate`) return a new value that
/// shares the same identity; the receiver is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CategoryRecord")]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: String,
    #[serde(rename = "isActive")]
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Soft delete tombstone.
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Creates a category with a generated ID, stamped now.
    ///
    /// Never fails: call [`Category::validate`] to check field rules.
    pub fn new_category(name: Option<&str>, description: impl Into<String>, active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.map(str::to_string),
            description: description.into(),
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        }
    }

    /// Rebuilds a category from previously stored state.
    ///
    /// Used by import and persistence paths where identity and timestamps
    /// already exist. Field rules are not checked here.
    ///
    /// # Errors
    /// - `id` is nil.
    /// - `updated_at` is earlier than `created_at`.
    /// - `updated_at` is the latest representable instant.
    /// - `deleted_at` presence does not match `!active`.
    pub fn with_state(
        id: CategoryId,
        name: Option<String>,
        description: String,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let mut notification = Notification::create();
        if id.is_nil() {
            notification.append(ValidationError::new("'id' should not be nil"))?;
        }
        if updated_at < created_at {
            notification.append(ValidationError::new(
                "'updatedAt' should not be earlier than 'createdAt'",
            ))?;
        }
        if advance(updated_at).is_none() {
            notification.append(ValidationError::new("'updatedAt' is out of range"))?;
        }
        if active == deleted_at.is_some() {
            notification.append(ValidationError::new(
                "'deletedAt' must be set exactly when the category is inactive",
            ))?;
        }
        notification.into_result()?;

        Ok(Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        })
    }

    /// Reports field rule violations through `handler`.
    ///
    /// # Errors
    /// - Returns `Err` only when `handler` fails fast.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        CategoryValidator::new(self, handler).validate()
    }

    /// Replaces name, description and active flag.
    ///
    /// Deactivating an already inactive category keeps its original
    /// `deleted_at`.
    pub fn update(
        &self,
        name: Option<&str>,
        description: impl Into<String>,
        active: bool,
    ) -> Self {
        let mut next = self.clone();
        next.name = name.map(str::to_string);
        next.description = description.into();
        next.apply_active(active, self.next_stamp());
        next
    }

    pub fn activate(&self) -> Self {
        let mut next = self.clone();
        next.apply_active(true, self.next_stamp());
        next
    }

    /// Marks the category inactive (soft delete).
    ///
    /// Keeps an existing `deleted_at`.
    pub fn deactivate(&self) -> Self {
        let mut next = self.clone();
        next.apply_active(false, self.next_stamp());
        next
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn apply_active(&mut self, active: bool, at: DateTime<Utc>) {
        if active {
            self.deleted_at = None;
        } else if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
        self.active = active;
        self.updated_at = at;
    }

    fn next_stamp(&self) -> DateTime<Utc> {
        stamp_after(self.updated_at)
    }
}

/// Returns the current time, or one nanosecond past `previous` when the
/// clock has not moved beyond it.
///
/// Saturates at `previous` when no later instant is representable.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        advance(previous).unwrap_or(previous)
    }
}

fn advance(at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    at.checked_add_signed(Duration::nanoseconds(1))
}

/// Wire shape accepted on deserialization; converted through
/// `Category::with_state`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    id: CategoryId,
    name: Option<String>,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = DomainError;

    fn try_from(value: CategoryRecord) -> Result<Self, Self::Error> {
        Category::with_state(
            value.id,
            value.name,
            value.description,
            value.is_active,
            value.created_at,
            value.updated_at,
            value.deleted_at,
        )
    }
}

use catalog_core::{Category, Notification, ThrowsValidationHandler, ValidationHandler};

const NAME: &str = "Filmes";
const DESCRIPTION: &str = "A categoria mais assistida";

fn fail_fast_errors(category: &Category) -> Vec<String> {
    let err = category
        .validate(&mut ThrowsValidationHandler::new())
        .unwrap_err();
    err.errors()
        .iter()
        .map(|e| e.message().to_string())
        .collect()
}

#[test]
fn new_category_sets_fields_and_timestamps() {
    let category = Category::new_category(Some(NAME), DESCRIPTION, true);

    assert!(!category.id().is_nil());
    assert_eq!(category.name(), Some(NAME));
    assert_eq!(category.description(), DESCRIPTION);
    assert!(category.is_active());
    assert_eq!(category.created_at(), category.updated_at());
    assert_eq!(category.deleted_at(), None);
}

#[test]
fn new_categories_get_distinct_ids() {
    let first = Category::new_category(Some(NAME), DESCRIPTION, true);
    let second = Category::new_category(Some(NAME), DESCRIPTION, true);
    assert_ne!(first.id(), second.id());
}

#[test]
fn validate_rejects_missing_name() {
    let category = Category::new_category(None, DESCRIPTION, true);
    assert_eq!(fail_fast_errors(&category), vec!["'name' should not be null"]);
}

#[test]
fn validate_rejects_blank_name() {
    let category = Category::new_category(Some("      "), DESCRIPTION, true);
    assert_eq!(fail_fast_errors(&category), vec!["'name' should not be empty"]);
}

#[test]
fn validate_rejects_name_shorter_than_three() {
    let category = Category::new_category(Some("no"), DESCRIPTION, true);
    assert_eq!(
        fail_fast_errors(&category),
        vec!["'name' must be between 2 and 255 characters"]
    );
}

#[test]
fn validate_rejects_name_longer_than_255() {
    let name = "Fala pro cliente que um erro não identificado otimizou a renderização de uma \
                compilação com tempo acima da media. Dado o fluxo de dados atual, a disposição \
                dos elementos HTML superou o desempenho no fechamento automático das tags. Desde \
                ontem a noite a compilação final do programa causou a race condition.";
    assert!(name.trim().chars().count() > 255);

    let category = Category::new_category(Some(name), DESCRIPTION, true);
    assert_eq!(
        fail_fast_errors(&category),
        vec!["'name' must be between 2 and 255 characters"]
    );
}

#[test]
fn accumulating_handler_collects_single_name_error() {
    let category = Category::new_category(None, DESCRIPTION, true);
    let mut notification = Notification::create();

    category
        .validate(&mut notification)
        .expect("notification never fails");

    assert!(notification.has_errors());
    assert_eq!(notification.errors().len(), 1);
    assert_eq!(
        notification.first_error().map(|e| e.message()),
        Some("'name' should not be null")
    );
}

#[test]
fn blank_description_is_valid() {
    let category = Category::new_category(Some(NAME), "     ", true);
    category
        .validate(&mut ThrowsValidationHandler::new())
        .expect("blank description should be accepted");
    assert_eq!(category.description(), "     ");
}

#[test]
fn inactive_category_is_valid_and_tombstoned() {
    let category = Category::new_category(Some(NAME), DESCRIPTION, false);
    category
        .validate(&mut ThrowsValidationHandler::new())
        .expect("inactive category should be valid");

    assert!(!category.is_active());
    assert!(category.deleted_at().is_some());
}

#[test]
fn deactivate_active_category() {
    let category = Category::new_category(Some(NAME), DESCRIPTION, true);
    let deactivated = category.deactivate();

    assert_eq!(deactivated.id(), category.id());
    assert_eq!(deactivated.name(), Some(NAME));
    assert_eq!(deactivated.description(), DESCRIPTION);
    assert!(!deactivated.is_active());
    assert_eq!(deactivated.created_at(), category.created_at());
    assert!(deactivated.updated_at() > category.updated_at());
    assert!(deactivated.deleted_at().is_some());

    // The receiver keeps its state.
    assert!(category.is_active());
    assert_eq!(category.deleted_at(), None);
}

#[test]
fn deactivate_inactive_category_keeps_deleted_at() {
    let category = Category::new_category(Some(NAME), DESCRIPTION, false);
    let deleted_at = category.deleted_at();

    let deactivated = category.deactivate();

    assert_eq!(deactivated.id(), category.id());
    assert!(!deactivated.is_active());
    assert_eq!(deactivated.created_at(), category.created_at());
    assert!(deactivated.updated_at() > category.updated_at());
    assert_eq!(deactivated.deleted_at(), deleted_at);
}

#[test]
fn activate_inactive_category() {
    let category = Category::new_category(Some(NAME), DESCRIPTION, false);
    let activated = category.activate();

    assert_eq!(activated.id(), category.id());
    assert!(activated.is_active());
    assert_eq!(activated.created_at(), category.created_at());
    assert!(activated.updated_at() > category.updated_at());
    assert_eq!(activated.deleted_at(), None);
}

#[test]
fn update_replaces_fields() {
    let category = Category::new_category(Some("Film"), "A categoria", true);
    let updated = category.update(Some(NAME), DESCRIPTION, true);

    updated
        .validate(&mut ThrowsValidationHandler::new())
        .expect("updated category should be valid");

    assert_eq!(updated.id(), category.id());
    assert_eq!(updated.name(), Some(NAME));
    assert_eq!(updated.description(), DESCRIPTION);
    assert!(updated.is_active());
    assert_eq!(updated.created_at(), category.created_at());
    assert!(updated.updated_at() > category.updated_at());
    assert_eq!(updated.deleted_at(), None);
}

#[test]
fn update_to_inactive_sets_deleted_at() {
    let category = Category::new_category(Some("Film"), "A categoria", true);
    let updated = category.update(Some(NAME), DESCRIPTION, false);

    assert!(!updated.is_active());
    assert!(updated.updated_at() > category.updated_at());
    assert!(updated.deleted_at().is_some());
}

#[test]
fn update_inactive_to_inactive_keeps_deleted_at() {
    let category = Category::new_category(Some("Film"), "A categoria", false);
    let updated = category.update(Some(NAME), DESCRIPTION, false);

    assert_eq!(updated.deleted_at(), category.deleted_at());
}

#[test]
fn update_stores_invalid_values_until_validated() {
    let category = Category::new_category(Some("Film"), "A categoria", true);
    let updated = category.update(None, DESCRIPTION, true);

    assert_eq!(updated.id(), category.id());
    assert_eq!(updated.name(), None);
    assert_eq!(updated.description(), DESCRIPTION);
    assert!(updated.updated_at() > category.updated_at());
    assert_eq!(updated.deleted_at(), None);

    assert_eq!(fail_fast_errors(&updated), vec!["'name' should not be null"]);
}

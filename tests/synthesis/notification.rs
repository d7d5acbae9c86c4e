//! Integration tests for notification synthesis
//!
//! Tests accessor eligibility, the two-phase setter, and field opt-out.

use scrivener_model::{
    Declaration, DeclarationCatalog, IntentMarker, Member, QualifiedName, TypeRef, Visibility,
};
use scrivener_synthesis::{NotificationPropertyRequest, NotificationsRequest, notification};

fn model_class() -> Declaration {
    Declaration::class("app.Document")
        .with_member(Member::field("notifier", TypeRef::new("PropertyNotifier")))
        .with_member(Member::field("_title", TypeRef::new("String")))
        .with_member(Member::field("_revision", TypeRef::new("i64")))
}

fn request(is_changed: bool) -> NotificationsRequest {
    NotificationsRequest {
        target: QualifiedName::new("app.Document"),
        is_changed,
    }
}

// =============================================================================
// Accessor shape
// =============================================================================

#[test]
fn getter_and_guarded_setter_per_field() {
    let catalog = DeclarationCatalog::new().insert(model_class()).unwrap();
    let text = notification::generate(&request(false), &catalog).unwrap();

    assert!(text.contains("pub fn title(&self) -> &String"));
    assert!(text.contains("&self._title"));
    assert!(text.contains("pub fn set_title(&mut self, value: String)"));
    assert!(text.contains("if self._title == value"));
    assert!(text.contains("pub fn set_revision(&mut self, value: i64)"));
}

#[test]
fn setter_raises_changing_before_assignment_and_changed_after() {
    let catalog = DeclarationCatalog::new().insert(model_class()).unwrap();
    let text = notification::generate(&request(false), &catalog).unwrap();

    let changing = text.find("self.notifier.raise_changing(\"title\");").unwrap();
    let assign = text.find("self._title = value;").unwrap();
    let changed = text.find("self.notifier.raise_changed(\"title\");").unwrap();
    assert!(changing < assign);
    assert!(assign < changed);
}

#[test]
fn is_changed_accessor_is_optional() {
    let catalog = DeclarationCatalog::new().insert(model_class()).unwrap();

    let without = notification::generate(&request(false), &catalog).unwrap();
    assert!(!without.contains("is_changed"));

    let with = notification::generate(&request(true), &catalog).unwrap();
    assert!(with.contains("pub fn is_changed(&self) -> bool"));
    assert!(with.contains("self.notifier.is_changed()"));
}

// =============================================================================
// Eligibility
// =============================================================================

#[test]
fn notifier_public_and_static_fields_are_ineligible() {
    let class = model_class()
        .with_member(Member::field("_count", TypeRef::new("i64")).with_visibility(Visibility::Public))
        .with_member(Member::Field {
            name: "_shared".to_string(),
            ty: TypeRef::new("i64"),
            is_static: true,
            visibility: Visibility::Private,
        });
    let catalog = DeclarationCatalog::new().insert(class).unwrap();

    let text = notification::generate(&request(false), &catalog).unwrap();
    assert!(!text.contains("notifier(&self)"));
    assert!(!text.contains("set_count"));
    assert!(!text.contains("set_shared"));
}

#[test]
fn excluded_fields_are_skipped() {
    let catalog = DeclarationCatalog::new()
        .insert(model_class())
        .unwrap()
        .insert(
            Declaration::field("app.Document._revision", "app.Document", TypeRef::new("i64"))
                .with_marker(IntentMarker::NotificationExclude),
        )
        .unwrap();

    let text = notification::generate(&request(false), &catalog).unwrap();
    assert!(text.contains("set_title"));
    assert!(!text.contains("set_revision"));
}

// =============================================================================
// Field-level request
// =============================================================================

#[test]
fn single_field_request_emits_one_pair() {
    let field = Declaration::field("app.Document._title", "app.Document", TypeRef::new("String"));
    let catalog = DeclarationCatalog::new()
        .insert(model_class())
        .unwrap()
        .insert(field)
        .unwrap();
    let request = NotificationPropertyRequest {
        field: QualifiedName::new("app.Document._title"),
        parent: QualifiedName::new("app.Document"),
    };

    let text = notification::generate_property(&request, &catalog).unwrap();
    assert!(text.contains("impl Document {"));
    assert!(text.contains("pub fn title(&self) -> &String"));
    assert!(text.contains("pub fn set_title(&mut self, value: String)"));
    assert!(!text.contains("set_revision"));
}

//! Integration tests for the intent marker surface
//!
//! Tests family classification and marker queries on declarations.

use scrivener_model::{ArtifactFamily, Declaration, IntentMarker};

// =============================================================================
// Families
// =============================================================================

#[test]
fn family_tokens_are_stable_and_distinct() {
    let tokens: Vec<&str> = ArtifactFamily::all().iter().map(|f| f.token()).collect();
    assert_eq!(
        tokens,
        vec![
            "abstraction",
            "enum-extensions",
            "enumerator-extensions",
            "notifications",
            "notification-property",
            "wrapper",
        ]
    );
}

#[test]
fn every_request_marker_names_its_family() {
    assert_eq!(
        IntentMarker::abstraction("a.T", "a.I", "a.A").family(),
        Some(ArtifactFamily::Abstraction)
    );
    assert_eq!(
        IntentMarker::EnumExtensions.family(),
        Some(ArtifactFamily::EnumExtensions)
    );
    assert_eq!(
        IntentMarker::EnumeratorExtensions.family(),
        Some(ArtifactFamily::EnumeratorExtensions)
    );
    assert_eq!(
        IntentMarker::notifications(false).family(),
        Some(ArtifactFamily::Notifications)
    );
    assert_eq!(
        IntentMarker::NotificationProperty.family(),
        Some(ArtifactFamily::NotificationProperty)
    );
    assert_eq!(
        IntentMarker::wrapper("a.W").family(),
        Some(ArtifactFamily::Wrapper)
    );
}

#[test]
fn the_exclude_marker_requests_nothing() {
    assert_eq!(IntentMarker::NotificationExclude.family(), None);

    let field = Declaration::class("app.Model").with_marker(IntentMarker::NotificationExclude);
    assert!(
        ArtifactFamily::all()
            .iter()
            .all(|family| !field.requests_family(*family))
    );
}

// =============================================================================
// Declaration queries
// =============================================================================

#[test]
fn requests_family_sees_only_attached_markers() {
    let decl = Declaration::enumeration("app.Mode").with_marker(IntentMarker::EnumExtensions);

    assert!(decl.requests_family(ArtifactFamily::EnumExtensions));
    assert!(!decl.requests_family(ArtifactFamily::EnumeratorExtensions));
    assert!(!decl.is_unmarked());
}

#[test]
fn abstraction_marker_keeps_its_exclusions() {
    let marker = IntentMarker::abstraction_excluding(
        "a.T",
        "a.I",
        "a.A",
        ["dispose", "clone_handle"].map(String::from),
    );
    let IntentMarker::Abstraction {
        exclude_methods, ..
    } = &marker
    else {
        panic!("expected an abstraction marker");
    };
    assert!(exclude_methods.contains(&"dispose".to_string()));
    assert_eq!(exclude_methods.len(), 2);
}

//! Integration tests for the rule matcher
//!
//! Tests multi-family declarations and request validation verdicts.

use scrivener_engine::RuleMatcher;
use scrivener_foundation::ErrorKind;
use scrivener_model::{
    ArtifactFamily, Declaration, DeclarationCatalog, IntentMarker, Member, TypeRef,
};
use scrivener_synthesis::Request;

// =============================================================================
// Multi-family declarations
// =============================================================================

#[test]
fn one_enum_can_request_both_helper_families() {
    let decl = Declaration::enumeration("app.Mode")
        .with_member(Member::variant("Read", 0))
        .with_marker(IntentMarker::EnumExtensions)
        .with_marker(IntentMarker::EnumeratorExtensions);
    let catalog = DeclarationCatalog::new().insert(decl.clone()).unwrap();

    let verdicts = RuleMatcher::match_declaration(&decl, &catalog);
    let families: Vec<ArtifactFamily> = verdicts
        .into_iter()
        .map(|v| v.unwrap().family())
        .collect();
    assert_eq!(
        families,
        vec![
            ArtifactFamily::EnumExtensions,
            ArtifactFamily::EnumeratorExtensions,
        ]
    );
}

#[test]
fn a_bad_marker_does_not_hide_a_valid_sibling() {
    // Notifications is valid on this class; the wrapper reference is broken.
    let decl = Declaration::class("app.Model")
        .with_member(Member::field("_title", TypeRef::new("String")))
        .with_marker(IntentMarker::notifications(false))
        .with_marker(IntentMarker::wrapper("app.Gone"));
    let catalog = DeclarationCatalog::new().insert(decl.clone()).unwrap();

    let verdicts = RuleMatcher::match_declaration(&decl, &catalog);
    assert_eq!(verdicts.len(), 2);
    assert!(
        verdicts
            .iter()
            .any(|v| matches!(v, Ok(Request::Notifications(_))))
    );
    assert!(verdicts.iter().any(Result::is_err));
}

// =============================================================================
// Validation verdicts
// =============================================================================

#[test]
fn each_rejection_names_its_cause() {
    let catalog = DeclarationCatalog::new()
        .insert(Declaration::enumeration("app.Mode"))
        .unwrap();

    // Duplicate marker.
    let doubled = Declaration::enumeration("app.Doubled")
        .with_marker(IntentMarker::EnumeratorExtensions)
        .with_marker(IntentMarker::EnumeratorExtensions);
    let err = RuleMatcher::match_enumerator_extensions(&doubled).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateMarker { .. }));

    // Wrong declaration kind.
    let misplaced = Declaration::interface("app.IFace").with_marker(IntentMarker::EnumExtensions);
    let err = RuleMatcher::match_enum_extensions(&misplaced).unwrap_err();
    let ErrorKind::IneligibleDeclaration { family, kind } = err.kind else {
        panic!("expected ineligible declaration");
    };
    assert_eq!(family, "enum-extensions");
    assert_eq!(kind, "interface");

    // Empty marker parameter.
    let unnamed = Declaration::class("app.W").with_marker(IntentMarker::wrapper(""));
    let err = RuleMatcher::match_wrapper(&unnamed, &catalog).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedMarker { .. }));
}

#[test]
fn abstraction_target_must_be_a_class() {
    let facade = Declaration::class("app.Facade").with_marker(IntentMarker::abstraction(
        "app.Mode",
        "app.IFacade",
        "app.FacadeAdapter",
    ));
    let catalog = DeclarationCatalog::new()
        .insert(facade.clone())
        .unwrap()
        .insert(Declaration::enumeration("app.Mode"))
        .unwrap()
        .insert(Declaration::interface("app.IFacade"))
        .unwrap()
        .insert(Declaration::class("app.FacadeAdapter"))
        .unwrap();

    let err = RuleMatcher::match_abstraction(&facade, &catalog).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IneligibleDeclaration { .. }));
}

#[test]
fn unresolved_errors_name_both_sides_of_the_reference() {
    let decl = Declaration::class("app.Wrapper").with_marker(IntentMarker::wrapper("app.Gone"));
    let catalog = DeclarationCatalog::new().insert(decl.clone()).unwrap();

    let err = RuleMatcher::match_wrapper(&decl, &catalog).unwrap_err();
    let ErrorKind::UnresolvedReference {
        name,
        referenced_by,
    } = err.kind
    else {
        panic!("expected unresolved reference");
    };
    assert_eq!(name, "app.Gone");
    assert_eq!(referenced_by, "app.Wrapper");
}

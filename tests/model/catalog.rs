//! Integration tests for the declaration catalog
//!
//! Tests insertion, qualified-name resolution, and ordering guarantees.

use scrivener_foundation::ErrorKind;
use scrivener_model::{
    Declaration, DeclarationCatalog, DeclarationKind, Member, QualifiedName, TypeRef,
};

fn sample_catalog() -> DeclarationCatalog {
    DeclarationCatalog::new()
        .insert(Declaration::class("app.io.Console"))
        .unwrap()
        .insert(Declaration::enumeration("app.Mode"))
        .unwrap()
        .insert(Declaration::interface("app.io.IConsole"))
        .unwrap()
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn resolve_by_qualified_name() {
    let catalog = sample_catalog();

    let console = catalog.resolve("app.io.Console").unwrap();
    assert_eq!(console.kind, DeclarationKind::Class);
    assert_eq!(console.name.simple_name(), "Console");

    assert!(catalog.resolve("app.io.Missing").is_none());
}

#[test]
fn resolution_is_exact_not_suffix_based() {
    let catalog = sample_catalog();
    assert!(catalog.resolve("Console").is_none());
    assert!(catalog.resolve("io.Console").is_none());
}

#[test]
fn declarations_iterate_in_insertion_order() {
    let catalog = sample_catalog();
    let names: Vec<&str> = catalog
        .declarations()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["app.io.Console", "app.Mode", "app.io.IConsole"]);
}

// =============================================================================
// Insertion
// =============================================================================

#[test]
fn duplicate_insert_is_an_error() {
    let catalog = sample_catalog();
    let err = catalog
        .insert(Declaration::class("app.Mode"))
        .unwrap_err();
    let ErrorKind::DuplicateDeclaration { name } = err.kind else {
        panic!("expected duplicate declaration error");
    };
    assert_eq!(name, "app.Mode");
}

#[test]
fn insert_is_persistent() {
    let before = sample_catalog();
    let after = before
        .insert(Declaration::class("app.Extra"))
        .unwrap();

    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 4);
    assert!(before.resolve("app.Extra").is_none());
}

#[test]
fn from_iterator_keeps_the_first_of_a_duplicate() {
    let first = Declaration::class("app.Twice");
    let second = Declaration::interface("app.Twice");
    let catalog: DeclarationCatalog = vec![first, second].into_iter().collect();

    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.resolve("app.Twice").unwrap().kind,
        DeclarationKind::Class
    );
}

// =============================================================================
// Field declarations
// =============================================================================

#[test]
fn field_declarations_carry_their_signature() {
    let field = Declaration::field("app.Model._title", "app.Model", TypeRef::new("String"));

    assert_eq!(field.kind, DeclarationKind::Field);
    assert_eq!(field.parent, Some(QualifiedName::new("app.Model")));

    let (name, ty) = field.field_signature().unwrap();
    assert_eq!(name, "_title");
    assert_eq!(ty.name, "String");
}

#[test]
fn non_field_declarations_have_no_signature() {
    let class = Declaration::class("app.Model")
        .with_member(Member::field("_title", TypeRef::new("String")));
    assert!(class.field_signature().is_none());
}

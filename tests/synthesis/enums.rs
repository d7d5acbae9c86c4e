//! Integration tests for the two enum helper families
//!
//! Tests declaration-order name tables and the totality of the fast lookups.

use scrivener_model::{Declaration, DeclarationCatalog, Member, QualifiedName};
use scrivener_synthesis::{
    EnumExtensionsRequest, EnumeratorExtensionsRequest, enum_ext, enumerator_ext, writer,
};

fn count_catalog() -> DeclarationCatalog {
    let count = Declaration::enumeration("app.Count")
        .with_member(Member::variant("None", 0))
        .with_member(Member::variant("One", 1))
        .with_member(Member::variant("Two", 2))
        .with_member(Member::variant("Three", 3));
    DeclarationCatalog::new().insert(count).unwrap()
}

fn fast_request() -> EnumeratorExtensionsRequest {
    EnumeratorExtensionsRequest {
        target: QualifiedName::new("app.Count"),
    }
}

// =============================================================================
// Reflection-style family
// =============================================================================

#[test]
fn names_helper_lists_variants_in_declaration_order() {
    let request = EnumExtensionsRequest {
        target: QualifiedName::new("app.Count"),
    };
    let text = enum_ext::generate(&request, &count_catalog()).unwrap();

    assert!(text.starts_with(writer::BANNER));
    assert!(text.contains("pub fn names(&self) -> &'static [&'static str]"));
    assert!(text.contains("&[\"None\", \"One\", \"Two\", \"Three\"]"));
}

// =============================================================================
// Fast family
// =============================================================================

#[test]
fn fast_surface_is_complete() {
    let text = enumerator_ext::generate(&fast_request(), &count_catalog()).unwrap();

    assert!(text.contains("pub fn names() -> &'static [&'static str]"));
    assert!(text.contains("pub fn names_fast(&self) -> &'static [&'static str]"));
    assert!(text.contains("pub fn values_fast(&self) -> &'static [Self]"));
    assert!(text.contains("pub fn is_defined_fast(value: i64) -> bool"));
    assert!(text.contains("pub fn is_name_defined_fast(name: &str) -> bool"));
    assert!(text.contains("pub fn to_string_fast(value: i64) -> String"));
}

#[test]
fn fast_tables_preserve_declaration_order() {
    let text = enumerator_ext::generate(&fast_request(), &count_catalog()).unwrap();

    assert!(text.contains("&[\"None\", \"One\", \"Two\", \"Three\"]"));
    assert!(text.contains("&[Self::None, Self::One, Self::Two, Self::Three]"));
}

#[test]
fn defined_lookups_close_over_the_declared_values() {
    let text = enumerator_ext::generate(&fast_request(), &count_catalog()).unwrap();

    // Membership is a closed match; 999 or -1 can only fall through to false.
    assert!(text.contains("matches!(value, 0 | 1 | 2 | 3)"));
    assert!(text.contains("matches!(name, \"None\" | \"One\" | \"Two\" | \"Three\")"));
}

#[test]
fn to_string_fast_falls_back_to_decimal() {
    let text = enumerator_ext::generate(&fast_request(), &count_catalog()).unwrap();

    assert!(text.contains("0 => \"None\".to_string(),"));
    assert!(text.contains("3 => \"Three\".to_string(),"));
    assert!(text.contains("other => other.to_string(),"));
}

#[test]
fn alias_values_resolve_to_the_first_name() {
    let aliased = Declaration::enumeration("app.Status")
        .with_member(Member::variant("Ok", 0))
        .with_member(Member::variant("Success", 0))
        .with_member(Member::variant("Failed", 1));
    let catalog = DeclarationCatalog::new().insert(aliased).unwrap();
    let request = EnumeratorExtensionsRequest {
        target: QualifiedName::new("app.Status"),
    };

    let text = enumerator_ext::generate(&request, &catalog).unwrap();
    // Both names stay listed, but value 0 displays as the first declared name.
    assert!(text.contains("&[\"Ok\", \"Success\", \"Failed\"]"));
    assert!(text.contains("0 => \"Ok\".to_string(),"));
    assert!(!text.contains("0 => \"Success\".to_string(),"));
}

#[test]
fn empty_enum_lookups_are_total() {
    let empty = Declaration::enumeration("app.Nothing");
    let catalog = DeclarationCatalog::new().insert(empty).unwrap();
    let request = EnumeratorExtensionsRequest {
        target: QualifiedName::new("app.Nothing"),
    };

    let text = enumerator_ext::generate(&request, &catalog).unwrap();
    assert!(text.contains("pub fn is_defined_fast(_value: i64) -> bool"));
    assert!(text.contains("pub fn to_string_fast(value: i64) -> String"));
    assert!(text.contains("value.to_string()"));
    assert!(!text.contains("matches!"));
}

// =============================================================================
// Table semantics (direct, no text)
// =============================================================================

#[test]
fn table_lookup_matches_emitted_semantics() {
    let catalog = count_catalog();
    let table = enumerator_ext::EnumTable::from_declaration(catalog.resolve("app.Count").unwrap());

    assert!(table.contains_value(0));
    assert!(!table.contains_value(999));
    assert!(!table.contains_value(-1));
    assert_eq!(table.display(2), "Two");
    assert_eq!(table.display(999), "999");
    assert_eq!(table.display(-1), "-1");
}

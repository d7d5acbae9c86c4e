//! Tests for incremental sessions with snapshot persistence
//!
//! A catalog saved and reloaded through the snapshot format must drive a
//! session to the same artifacts as the original, and memo reuse must be
//! invisible in the output.

use scrivener_model::{Declaration, DeclarationCatalog, IntentMarker, Member, Param, TypeRef};
use scrivener_runtime::{GenerationSession, serialize};

fn editor_catalog() -> DeclarationCatalog {
    let editor = Declaration::class("app.Editor")
        .with_member(Member::static_method(
            "open",
            vec![Param::new("path", TypeRef::new("String"))],
            None,
        ))
        .with_marker(IntentMarker::abstraction(
            "app.Editor",
            "app.IEditor",
            "app.EditorAdapter",
        ));
    let mode = Declaration::enumeration("app.Mode")
        .with_member(Member::variant("Insert", 0))
        .with_member(Member::variant("Overwrite", 1))
        .with_marker(IntentMarker::EnumeratorExtensions);

    DeclarationCatalog::new()
        .insert(editor)
        .unwrap()
        .insert(mode)
        .unwrap()
        .insert(Declaration::interface("app.IEditor"))
        .unwrap()
        .insert(Declaration::class("app.EditorAdapter"))
        .unwrap()
}

#[test]
fn reuse_is_invisible_in_output() {
    let catalog = editor_catalog();
    let mut session = GenerationSession::new();

    let first = session.advance(&catalog).unwrap();
    let second = session.advance(&catalog).unwrap();

    assert_eq!(second.artifacts_reused, 2);
    assert_eq!(second.artifacts_regenerated, 0);
    for artifact in first.artifacts.iter() {
        let other = second.artifacts.get(&artifact.key).unwrap();
        assert_eq!(artifact.text, other.text);
    }
}

#[test]
fn only_the_edited_declaration_regenerates() {
    let mut session = GenerationSession::new();
    let _ = session.advance(&editor_catalog()).unwrap();

    // Rebuild the catalog with one extra enum variant; the editor facade and
    // its references are untouched.
    let edited: DeclarationCatalog = editor_catalog()
        .declarations()
        .map(|d| {
            if d.name.as_str() == "app.Mode" {
                d.clone().with_member(Member::variant("ReadOnly", 2))
            } else {
                d.clone()
            }
        })
        .collect();

    let run = session.advance(&edited).unwrap();
    assert_eq!(run.artifacts_reused, 1);
    assert_eq!(run.artifacts_regenerated, 1);
}

#[test]
fn snapshot_roundtrip_drives_identical_generation() {
    let catalog = editor_catalog();
    let bytes = serialize::to_bytes(&catalog).unwrap();
    let restored: DeclarationCatalog = serialize::from_bytes(&bytes).unwrap();

    let original = GenerationSession::new().advance(&catalog).unwrap();
    let replayed = GenerationSession::new().advance(&restored).unwrap();

    assert_eq!(original.artifacts.len(), replayed.artifacts.len());
    for artifact in original.artifacts.iter() {
        let other = replayed.artifacts.get(&artifact.key).unwrap();
        assert_eq!(artifact.text, other.text);
        assert_eq!(artifact.file_name, other.file_name);
    }
}

#[test]
fn artifact_store_snapshot_survives_the_file_format() {
    let run = GenerationSession::new().advance(&editor_catalog()).unwrap();

    let temp_path = std::env::temp_dir().join("scrivener_integration_store.msgpack");
    serialize::save_to_file(&run.artifacts, &temp_path).unwrap();
    let restored: scrivener_engine::ArtifactStore =
        serialize::load_from_file(&temp_path).unwrap();

    assert_eq!(restored.len(), run.artifacts.len());
    for artifact in run.artifacts.iter() {
        assert_eq!(
            restored.get(&artifact.key).map(|a| a.text.as_str()),
            Some(artifact.text.as_str())
        );
    }

    let _ = std::fs::remove_file(&temp_path);
}

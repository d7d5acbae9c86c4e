//! Generated artifacts and their keyed storage.
//!
//! An artifact is keyed by (originating declaration, family); re-inserting
//! with the same key replaces prior output rather than appending, and
//! iteration is key-ordered, so the store's contents are deterministic for a
//! given catalog snapshot.

use scrivener_foundation::ScMap;
use scrivener_model::{ArtifactFamily, QualifiedName};

/// The stable identity of one generated artifact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactKey {
    /// Qualified name of the originating declaration.
    pub declaration: QualifiedName,
    /// The synthesis family that produced the artifact.
    pub family: ArtifactFamily,
}

impl ArtifactKey {
    /// Creates a new artifact key.
    #[must_use]
    pub fn new(declaration: QualifiedName, family: ArtifactFamily) -> Self {
        Self {
            declaration,
            family,
        }
    }
}

/// A named unit of generated output text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedArtifact {
    /// Stable identity of the artifact.
    pub key: ArtifactKey,
    /// Suggested file name: `<qualified-name>.<family-token>.rs`.
    pub file_name: String,
    /// The generated text.
    pub text: String,
}

impl GeneratedArtifact {
    /// Creates an artifact, deriving the file name from the key.
    #[must_use]
    pub fn new(key: ArtifactKey, text: String) -> Self {
        let file_name = format!("{}.{}.rs", key.declaration, key.family.token());
        Self {
            key,
            file_name,
            text,
        }
    }
}

/// Keyed artifact storage with replace-on-insert semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactStore {
    artifacts: ScMap<ArtifactKey, GeneratedArtifact>,
}

impl ArtifactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new store with the artifact inserted, replacing any prior
    /// artifact under the same key.
    #[must_use]
    pub fn insert(&self, artifact: GeneratedArtifact) -> Self {
        Self {
            artifacts: self.artifacts.insert(artifact.key.clone(), artifact),
        }
    }

    /// Gets an artifact by key.
    #[must_use]
    pub fn get(&self, key: &ArtifactKey) -> Option<&GeneratedArtifact> {
        self.artifacts.get(key)
    }

    /// Returns all artifacts in key order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.values()
    }

    /// Returns the number of stored artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Boundary contract for artifact consumers.
///
/// Re-emission with a key already seen replaces the prior output.
pub trait ArtifactSink {
    /// Accepts one generated artifact.
    fn emit(&mut self, artifact: &GeneratedArtifact);
}

/// An [`ArtifactSink`] collecting into an [`ArtifactStore`].
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    store: ArtifactStore,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected artifacts.
    #[must_use]
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }
}

impl ArtifactSink for MemorySink {
    fn emit(&mut self, artifact: &GeneratedArtifact) {
        self.store = self.store.insert(artifact.clone());
    }
}

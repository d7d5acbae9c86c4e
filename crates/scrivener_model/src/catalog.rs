//! The declaration catalog: one snapshot of everything the host declared.
//!
//! The catalog is an insertion-ordered persistent sequence with a name index.
//! A catalog value *is* a snapshot: cloning is O(1), and inserting returns a
//! new catalog leaving the original untouched, so incremental re-runs can hold
//! old and new snapshots side by side.

use scrivener_foundation::{Error, Result, ScMap, ScVec};

use crate::declaration::{Declaration, QualifiedName};

/// Insertion-ordered declaration store with qualified-name lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationCatalog {
    declarations: ScVec<Declaration>,
    index: ScMap<QualifiedName, usize>,
}

impl DeclarationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new catalog with the declaration appended.
    ///
    /// # Errors
    /// Returns an error if a declaration with the same qualified name is
    /// already present.
    pub fn insert(&self, declaration: Declaration) -> Result<Self> {
        if self.index.contains_key(&declaration.name) {
            return Err(Error::duplicate_declaration(declaration.name.as_str()));
        }
        let position = self.declarations.len();
        let index = self.index.insert(declaration.name.clone(), position);
        let declarations = self.declarations.push_back(declaration);
        Ok(Self {
            declarations,
            index,
        })
    }

    /// Resolves a qualified name to its declaration.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Declaration> {
        let position = self.index.get(&QualifiedName::new(name))?;
        self.declarations.get(*position)
    }

    /// Returns all declarations in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if the catalog holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl FromIterator<Declaration> for DeclarationCatalog {
    /// Builds a catalog from declarations, silently keeping the first of any
    /// duplicate names. Use [`DeclarationCatalog::insert`] when duplicates
    /// must be surfaced.
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for declaration in iter {
            if let Ok(next) = catalog.insert(declaration) {
                catalog = next;
            }
        }
        catalog
    }
}

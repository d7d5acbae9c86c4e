//! Error types for the Scrivener system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Convenience alias for results carrying a Scrivener [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Scrivener operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unresolved reference error.
    #[must_use]
    pub fn unresolved_reference(name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedReference {
            name: name.into(),
            referenced_by: referenced_by.into(),
        })
    }

    /// Creates a malformed marker error.
    #[must_use]
    pub fn malformed_marker(family: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedMarker {
            family: family.into(),
            reason: reason.into(),
        })
    }

    /// Creates a duplicate marker error.
    #[must_use]
    pub fn duplicate_marker(family: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateMarker {
            family: family.into(),
        })
    }

    /// Creates an ineligible declaration error.
    #[must_use]
    pub fn ineligible_declaration(family: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::IneligibleDeclaration {
            family: family.into(),
            kind: kind.into(),
        })
    }

    /// Creates a duplicate declaration error.
    #[must_use]
    pub fn duplicate_declaration(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateDeclaration { name: name.into() })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A marker references a declaration that is not in the catalog.
    #[error("unresolved reference: {name} (referenced by {referenced_by})")]
    UnresolvedReference {
        /// The qualified name that could not be resolved.
        name: String,
        /// The declaration whose marker carries the reference.
        referenced_by: String,
    },

    /// A marker's parameters fail validation.
    #[error("malformed {family} marker: {reason}")]
    MalformedMarker {
        /// The synthesis family the marker requests.
        family: String,
        /// Why the marker was rejected.
        reason: String,
    },

    /// A non-repeatable marker appears more than once on one declaration.
    #[error("duplicate {family} marker on one declaration")]
    DuplicateMarker {
        /// The synthesis family the marker requests.
        family: String,
    },

    /// The declaration's kind does not fit the requested family.
    #[error("declaration kind {kind} is not eligible for {family} synthesis")]
    IneligibleDeclaration {
        /// The synthesis family the marker requests.
        family: String,
        /// The declaration kind that was rejected.
        kind: String,
    },

    /// Two catalog declarations share one qualified name.
    #[error("duplicate declaration: {name}")]
    DuplicateDeclaration {
        /// The qualified name that was inserted twice.
        name: String,
    },

    /// Snapshot serialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Snapshot file IO failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Qualified name of the declaration being processed.
    pub declaration: Option<String>,
    /// Synthesis family token being processed.
    pub family: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declaration identity.
    #[must_use]
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Sets the synthesis family.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(declaration) = &self.declaration {
            write!(f, "at {declaration}")?;
        }
        if let Some(family) = &self.family {
            if self.declaration.is_some() {
                write!(f, " ")?;
            }
            write!(f, "({family})")?;
        }
        Ok(())
    }
}

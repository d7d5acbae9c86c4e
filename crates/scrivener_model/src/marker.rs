//! Intent markers: the author-facing request surface.
//!
//! The original system discovered requests through runtime attribute
//! reflection; here the request surface is a closed set of tagged variants
//! matched by exhaustive pattern dispatch. Each marker decorates exactly one
//! declaration; the abstraction marker additionally references two other
//! declarations by name, which the matcher resolves against the catalog.

use std::fmt;

use scrivener_foundation::ScSet;

/// The stable identifier of one synthesis engine's output kind.
///
/// Artifact keys pair a declaration name with a family, so the ordering here
/// also fixes artifact iteration order within one declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtifactFamily {
    /// Trait + delegating adapter over a static facade.
    Abstraction,
    /// Minimal reflection-style enum helpers.
    EnumExtensions,
    /// Match-table-backed fast enum helpers.
    EnumeratorExtensions,
    /// Change-notifying accessors for a whole class.
    Notifications,
    /// Change-notifying accessors for a single field.
    NotificationProperty,
    /// Delegating wrapper over a concrete class.
    Wrapper,
}

impl ArtifactFamily {
    /// Returns the stable lowercase token used in artifact file names.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Abstraction => "abstraction",
            Self::EnumExtensions => "enum-extensions",
            Self::EnumeratorExtensions => "enumerator-extensions",
            Self::Notifications => "notifications",
            Self::NotificationProperty => "notification-property",
            Self::Wrapper => "wrapper",
        }
    }

    /// All families in key order.
    #[must_use]
    pub fn all() -> &'static [ArtifactFamily] {
        &[
            Self::Abstraction,
            Self::EnumExtensions,
            Self::EnumeratorExtensions,
            Self::Notifications,
            Self::NotificationProperty,
            Self::Wrapper,
        ]
    }
}

impl fmt::Display for ArtifactFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// An author-attached request to generate a specific artifact family.
///
/// Every variant is non-repeatable: at most one marker of each family may
/// decorate one declaration. Violations are diagnostics, not panics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentMarker {
    /// Generate a trait and delegating adapter over a static facade.
    Abstraction {
        /// Qualified name of the static facade to mirror.
        target: String,
        /// Qualified name of the declaration naming the generated trait.
        abstraction: String,
        /// Qualified name of the declaration naming the generated adapter.
        implementation: String,
        /// Simple method names to omit from both outputs.
        exclude_methods: ScSet<String>,
    },
    /// Generate the minimal name-listing helper for an enum.
    EnumExtensions,
    /// Generate the full fast helper surface for an enum.
    EnumeratorExtensions,
    /// Generate change-notifying accessors for every eligible field.
    Notifications {
        /// Also generate an `is_changed` accessor.
        is_changed: bool,
    },
    /// Generate change-notifying accessors for this field alone.
    NotificationProperty,
    /// Opt this field out of class-level notification synthesis.
    NotificationExclude,
    /// Generate a delegating wrapper holding the named class.
    Wrapper {
        /// Qualified name of the class to wrap.
        class_name: String,
    },
}

impl IntentMarker {
    /// Returns the artifact family this marker requests.
    ///
    /// `NotificationExclude` is an opt-out rather than a request and has no
    /// family of its own.
    #[must_use]
    pub fn family(&self) -> Option<ArtifactFamily> {
        match self {
            Self::Abstraction { .. } => Some(ArtifactFamily::Abstraction),
            Self::EnumExtensions => Some(ArtifactFamily::EnumExtensions),
            Self::EnumeratorExtensions => Some(ArtifactFamily::EnumeratorExtensions),
            Self::Notifications { .. } => Some(ArtifactFamily::Notifications),
            Self::NotificationProperty => Some(ArtifactFamily::NotificationProperty),
            Self::NotificationExclude => None,
            Self::Wrapper { .. } => Some(ArtifactFamily::Wrapper),
        }
    }

    /// Creates an abstraction marker.
    #[must_use]
    pub fn abstraction(
        target: impl Into<String>,
        abstraction: impl Into<String>,
        implementation: impl Into<String>,
    ) -> Self {
        Self::Abstraction {
            target: target.into(),
            abstraction: abstraction.into(),
            implementation: implementation.into(),
            exclude_methods: ScSet::new(),
        }
    }

    /// Creates an abstraction marker with a method exclusion list.
    #[must_use]
    pub fn abstraction_excluding(
        target: impl Into<String>,
        abstraction: impl Into<String>,
        implementation: impl Into<String>,
        exclude_methods: impl IntoIterator<Item = String>,
    ) -> Self {
        Self::Abstraction {
            target: target.into(),
            abstraction: abstraction.into(),
            implementation: implementation.into(),
            exclude_methods: exclude_methods.into_iter().collect(),
        }
    }

    /// Creates a wrapper marker.
    #[must_use]
    pub fn wrapper(class_name: impl Into<String>) -> Self {
        Self::Wrapper {
            class_name: class_name.into(),
        }
    }

    /// Creates a class-level notifications marker.
    #[must_use]
    pub fn notifications(is_changed: bool) -> Self {
        Self::Notifications { is_changed }
    }
}

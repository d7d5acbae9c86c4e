//! Typed synthesis requests, one per artifact family.
//!
//! A request is the matcher's output: marker parameters extracted and
//! validated, with every referenced name known to resolve in the catalog at
//! extraction time. Engines consume requests and never re-validate marker
//! shape.

use scrivener_foundation::ScSet;
use scrivener_model::{ArtifactFamily, QualifiedName};

/// Request for a trait + delegating adapter over a static facade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbstractionRequest {
    /// The declaration carrying the marker.
    pub origin: QualifiedName,
    /// The static facade to mirror.
    pub target: QualifiedName,
    /// Declaration naming the generated trait.
    pub abstraction: QualifiedName,
    /// Declaration naming the generated adapter.
    pub implementation: QualifiedName,
    /// Simple member names to omit from both outputs.
    pub exclude_methods: ScSet<String>,
}

/// Request for the minimal reflection-style enum helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumExtensionsRequest {
    /// The marked enum.
    pub target: QualifiedName,
}

/// Request for the full fast enum helper surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumeratorExtensionsRequest {
    /// The marked enum.
    pub target: QualifiedName,
}

/// Request for class-level change-notifying accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationsRequest {
    /// The marked class.
    pub target: QualifiedName,
    /// Also generate an `is_changed` accessor.
    pub is_changed: bool,
}

/// Request for change-notifying accessors on a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationPropertyRequest {
    /// The marked field declaration.
    pub field: QualifiedName,
    /// The field's owning class.
    pub parent: QualifiedName,
}

/// Request for a delegating wrapper over a concrete class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapperRequest {
    /// The declaration carrying the marker; names the wrapper struct.
    pub wrapper: QualifiedName,
    /// The class to wrap.
    pub wrapped: QualifiedName,
}

/// A validated synthesis request of any family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Trait + adapter synthesis.
    Abstraction(AbstractionRequest),
    /// Minimal enum helper synthesis.
    EnumExtensions(EnumExtensionsRequest),
    /// Fast enum helper synthesis.
    EnumeratorExtensions(EnumeratorExtensionsRequest),
    /// Class-level notification synthesis.
    Notifications(NotificationsRequest),
    /// Field-level notification synthesis.
    NotificationProperty(NotificationPropertyRequest),
    /// Delegating wrapper synthesis.
    Wrapper(WrapperRequest),
}

impl Request {
    /// Returns the artifact family this request belongs to.
    #[must_use]
    pub fn family(&self) -> ArtifactFamily {
        match self {
            Self::Abstraction(_) => ArtifactFamily::Abstraction,
            Self::EnumExtensions(_) => ArtifactFamily::EnumExtensions,
            Self::EnumeratorExtensions(_) => ArtifactFamily::EnumeratorExtensions,
            Self::Notifications(_) => ArtifactFamily::Notifications,
            Self::NotificationProperty(_) => ArtifactFamily::NotificationProperty,
            Self::Wrapper(_) => ArtifactFamily::Wrapper,
        }
    }

    /// Returns the originating declaration's identity: the artifact key.
    #[must_use]
    pub fn declaration(&self) -> &QualifiedName {
        match self {
            Self::Abstraction(r) => &r.origin,
            Self::EnumExtensions(r) => &r.target,
            Self::EnumeratorExtensions(r) => &r.target,
            Self::Notifications(r) => &r.target,
            Self::NotificationProperty(r) => &r.field,
            Self::Wrapper(r) => &r.wrapper,
        }
    }
}

//! Declaration definitions.
//!
//! A declaration is one node in the catalog the host hands to the pipeline:
//! its kind, qualified name, members in declaration order, and any intent
//! markers the author attached. Declarations are read-only to the pipeline.

use std::fmt;

use crate::marker::{ArtifactFamily, IntentMarker};
use crate::member::{Member, TypeRef, Visibility};

/// The structural kind of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    /// A concrete class (or struct-like type).
    Class,
    /// An interface (or trait-like type).
    Interface,
    /// An enumeration with named variants.
    Enum,
    /// A single field, declared standalone so markers can ride it.
    Field,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Interface => write!(f, "interface"),
            Self::Enum => write!(f, "enum"),
            Self::Field => write!(f, "field"),
        }
    }
}

/// A fully-qualified dotted name (e.g. `demo.io.FileTools`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Creates a qualified name from a dotted string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the full dotted name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last segment of the dotted name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Returns true if the name has no characters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A single declaration in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    /// Structural kind.
    pub kind: DeclarationKind,
    /// Fully-qualified dotted name.
    pub name: QualifiedName,
    /// Owning declaration, set for fields (the containing class).
    pub parent: Option<QualifiedName>,
    /// Members in declaration order.
    pub members: Vec<Member>,
    /// Intent markers the author attached.
    pub markers: Vec<IntentMarker>,
}

impl Declaration {
    /// Creates an empty class declaration.
    #[must_use]
    pub fn class(name: impl Into<QualifiedName>) -> Self {
        Self {
            kind: DeclarationKind::Class,
            name: name.into(),
            parent: None,
            members: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Creates an empty interface declaration.
    #[must_use]
    pub fn interface(name: impl Into<QualifiedName>) -> Self {
        Self {
            kind: DeclarationKind::Interface,
            name: name.into(),
            parent: None,
            members: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Creates an empty enum declaration.
    #[must_use]
    pub fn enumeration(name: impl Into<QualifiedName>) -> Self {
        Self {
            kind: DeclarationKind::Enum,
            name: name.into(),
            parent: None,
            members: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Creates a standalone field declaration owned by `parent`.
    ///
    /// The field's own signature is carried as its single member, named by the
    /// last segment of `name`.
    #[must_use]
    pub fn field(name: impl Into<QualifiedName>, parent: impl Into<QualifiedName>, ty: TypeRef) -> Self {
        let name = name.into();
        let member = Member::Field {
            name: name.simple_name().to_string(),
            ty,
            is_static: false,
            visibility: Visibility::Private,
        };
        Self {
            kind: DeclarationKind::Field,
            name,
            parent: Some(parent.into()),
            members: vec![member],
            markers: Vec::new(),
        }
    }

    /// Builder method to append a member.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Builder method to append several members.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Builder method to attach a marker.
    #[must_use]
    pub fn with_marker(mut self, marker: IntentMarker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Returns true if any attached marker requests the given family.
    #[must_use]
    pub fn requests_family(&self, family: ArtifactFamily) -> bool {
        self.markers.iter().any(|m| m.family() == Some(family))
    }

    /// Returns true if no marker is attached at all.
    ///
    /// The pipeline skips unmarked declarations in O(1) via this check.
    #[must_use]
    pub fn is_unmarked(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the field member carried by a field declaration.
    #[must_use]
    pub fn field_signature(&self) -> Option<(&str, &TypeRef)> {
        self.members.iter().find_map(|m| match m {
            Member::Field { name, ty, .. } => Some((name.as_str(), ty)),
            _ => None,
        })
    }
}

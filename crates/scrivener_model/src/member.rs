//! Member signature definitions.
//!
//! Members are the language-agnostic description of what a declaration
//! exposes. Declaration order is preserved everywhere: generated text quotes
//! members in the order the host listed them.

use std::fmt;

/// A reference to a type by name, with generic arguments and optionality.
///
/// `optional` models nullability and renders as `Option<...>` in emitted text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    /// The base type name (e.g. `String`, `Vec`).
    pub name: String,
    /// Generic arguments, if any.
    pub args: Vec<TypeRef>,
    /// Whether the type is nullable at the source.
    pub optional: bool,
}

impl TypeRef {
    /// Creates a plain, non-optional type reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            optional: false,
        }
    }

    /// Creates an optional (nullable) type reference.
    #[must_use]
    pub fn option(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            optional: true,
        }
    }

    /// Creates a generic type reference with arguments.
    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
            optional: false,
        }
    }

    /// Marks this type reference optional.
    #[must_use]
    pub fn into_option(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A named method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl Param {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Accessibility of a member from the generated namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Accessible; mirrored by synthesis.
    Public,
    /// Inaccessible; never mirrored.
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// A single member signature on a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    /// A method with parameters and an optional return type.
    Method {
        /// Method name.
        name: String,
        /// Parameters in declaration order.
        params: Vec<Param>,
        /// Return type, `None` for unit.
        ret: Option<TypeRef>,
        /// Whether the method is static on its owner.
        is_static: bool,
        /// Accessibility.
        visibility: Visibility,
    },
    /// A property with a getter and an optional setter.
    Property {
        /// Property name.
        name: String,
        /// Property type.
        ty: TypeRef,
        /// Whether a setter exists.
        has_setter: bool,
        /// Whether the property is static on its owner.
        is_static: bool,
        /// Accessibility.
        visibility: Visibility,
    },
    /// A plain data field.
    Field {
        /// Field name (leading underscores allowed).
        name: String,
        /// Field type.
        ty: TypeRef,
        /// Whether the field is static on its owner.
        is_static: bool,
        /// Accessibility.
        visibility: Visibility,
    },
    /// An enum variant with its underlying value.
    Variant {
        /// Variant identifier.
        name: String,
        /// Underlying numeric value.
        value: i64,
    },
}

impl Member {
    /// Creates a public instance method.
    #[must_use]
    pub fn method(name: impl Into<String>, params: Vec<Param>, ret: Option<TypeRef>) -> Self {
        Self::Method {
            name: name.into(),
            params,
            ret,
            is_static: false,
            visibility: Visibility::Public,
        }
    }

    /// Creates a public static method.
    #[must_use]
    pub fn static_method(
        name: impl Into<String>,
        params: Vec<Param>,
        ret: Option<TypeRef>,
    ) -> Self {
        Self::Method {
            name: name.into(),
            params,
            ret,
            is_static: true,
            visibility: Visibility::Public,
        }
    }

    /// Creates a public instance property.
    #[must_use]
    pub fn property(name: impl Into<String>, ty: TypeRef, has_setter: bool) -> Self {
        Self::Property {
            name: name.into(),
            ty,
            has_setter,
            is_static: false,
            visibility: Visibility::Public,
        }
    }

    /// Creates a private instance field.
    #[must_use]
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::Field {
            name: name.into(),
            ty,
            is_static: false,
            visibility: Visibility::Private,
        }
    }

    /// Creates an enum variant.
    #[must_use]
    pub fn variant(name: impl Into<String>, value: i64) -> Self {
        Self::Variant {
            name: name.into(),
            value,
        }
    }

    /// Returns the member's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Method { name, .. }
            | Self::Property { name, .. }
            | Self::Field { name, .. }
            | Self::Variant { name, .. } => name,
        }
    }

    /// Returns true if the member is accessible from the generated namespace.
    #[must_use]
    pub fn is_public(&self) -> bool {
        match self {
            Self::Method { visibility, .. }
            | Self::Property { visibility, .. }
            | Self::Field { visibility, .. } => *visibility == Visibility::Public,
            Self::Variant { .. } => true,
        }
    }

    /// Returns true if the member is static on its owner.
    #[must_use]
    pub fn is_static(&self) -> bool {
        match self {
            Self::Method { is_static, .. }
            | Self::Property { is_static, .. }
            | Self::Field { is_static, .. } => *is_static,
            Self::Variant { .. } => false,
        }
    }

    /// Returns a builder-style copy with the given visibility.
    #[must_use]
    pub fn with_visibility(mut self, new_visibility: Visibility) -> Self {
        match &mut self {
            Self::Method { visibility, .. }
            | Self::Property { visibility, .. }
            | Self::Field { visibility, .. } => *visibility = new_visibility,
            Self::Variant { .. } => {}
        }
        self
    }
}

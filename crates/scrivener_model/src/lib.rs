//! Declarations, members, intent markers, and the declaration catalog.
//!
//! This crate provides:
//! - [`Declaration`] - Normalized description of a class, interface, enum, or field
//! - [`Member`] - Typed member signatures in declaration order
//! - [`IntentMarker`] - The closed set of author-attached generation requests
//! - [`DeclarationCatalog`] - Insertion-ordered, snapshot-cheap declaration store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod declaration;
pub mod marker;
pub mod member;

pub use catalog::DeclarationCatalog;
pub use declaration::{Declaration, DeclarationKind, QualifiedName};
pub use marker::{ArtifactFamily, IntentMarker};
pub use member::{Member, Param, TypeRef, Visibility};

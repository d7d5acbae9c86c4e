//! Code writer and synthesis engines for Scrivener artifact families.
//!
//! This crate provides:
//! - [`CodeWriter`] - Indentation-tracking text builder for generated artifacts
//! - [`Request`] - Typed, validated synthesis requests, one per family
//! - Engines - Pure functions from request + catalog to generated text
//!   ([`abstraction`], [`enum_ext`], [`enumerator_ext`], [`notification`],
//!   [`wrapper`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod abstraction;
pub mod enum_ext;
pub mod enumerator_ext;
pub mod notification;
pub mod request;
pub mod wrapper;
pub mod writer;

pub use request::{
    AbstractionRequest, EnumExtensionsRequest, EnumeratorExtensionsRequest, NotificationsRequest,
    NotificationPropertyRequest, Request, WrapperRequest,
};
pub use writer::{CodeWriter, OverloadNames, WriterConfig, rust_type, snake_ident};

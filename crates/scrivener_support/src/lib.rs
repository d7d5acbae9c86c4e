//! Runtime support types referenced by Scrivener-generated code.
//!
//! Generated notification accessors broadcast through a standard
//! observer-list object assumed present on the containing class. This crate
//! ships that object so generated text links against something concrete.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod notify;

pub use notify::PropertyNotifier;

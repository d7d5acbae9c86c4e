//! Errors, diagnostics, and persistent collections for Scrivener.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with declaration context
//! - [`Diagnostic`] - Structured diagnostics and the [`DiagnosticChannel`] boundary
//! - Persistent collections ([`ScVec`], [`ScSet`], [`ScMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod diagnostic;
pub mod error;

pub use collections::{ScMap, ScSet, ScVec};
pub use diagnostic::{Diagnostic, DiagnosticChannel, DiagnosticConfig, DiagnosticLog, Severity};
pub use error::{Error, ErrorContext, ErrorKind, Result};

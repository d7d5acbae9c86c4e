//! Scrivener - Declarative companion-code synthesis engine
//!
//! This crate re-exports all layers of the Scrivener system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: scrivener_runtime    — Incremental sessions, snapshot serialization
//! Layer 3: scrivener_engine     — Rule matching, pipeline, artifact storage
//! Layer 2: scrivener_synthesis  — Per-family engines, code writer
//!          scrivener_support    — Runtime library for generated notification code
//! Layer 1: scrivener_model      — Declarations, markers, the catalog
//! Layer 0: scrivener_foundation — Core types (collections, diagnostics, Error)
//! ```

pub use scrivener_engine as engine;
pub use scrivener_foundation as foundation;
pub use scrivener_model as model;
pub use scrivener_runtime as runtime;
pub use scrivener_support as support;
pub use scrivener_synthesis as synthesis;

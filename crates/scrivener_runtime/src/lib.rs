//! Incremental sessions and snapshot serialization for Scrivener.
//!
//! This crate provides:
//! - [`GenerationSession`] - Fingerprint-memoized re-run driver
//! - Catalog and artifact-store snapshot save/load (`MessagePack`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod serialize;
pub mod session;

pub use session::{GenerationSession, SessionRun};

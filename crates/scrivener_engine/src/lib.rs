//! Rule matching, pipeline orchestration, and artifact storage for Scrivener.
//!
//! This crate provides:
//! - [`RuleMatcher`] - Marker extraction and validation into typed requests
//! - [`GenerationPipeline`] - Catalog scan, synthesis dispatch, artifact collection
//! - [`ArtifactStore`] - Keyed, replace-on-insert artifact storage
//! - [`ArtifactSink`] - Boundary contract for artifact consumers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod artifact;
pub mod matcher;
pub mod pipeline;

pub use artifact::{ArtifactKey, ArtifactSink, ArtifactStore, GeneratedArtifact, MemorySink};
pub use matcher::RuleMatcher;
pub use pipeline::{GenerationOutcome, GenerationPipeline, generate_for};

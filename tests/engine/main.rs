//! Integration tests for Layer 3: Engine
//!
//! Tests for rule matching and the generation pipeline.

mod matching;

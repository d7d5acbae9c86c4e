//! Integration tests for Layer 2: Synthesis
//!
//! Text-level tests for the five artifact engines.

mod enums;
mod notification;

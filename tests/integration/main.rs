//! End-to-end integration tests
//!
//! Tests determinism across runs, the notification support library, and
//! incremental sessions with snapshot persistence.

mod notifier;
mod session;

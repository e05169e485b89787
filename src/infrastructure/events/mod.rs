//! Event Sink Implementations
//!
//! Provides concrete implementations of ImageEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives with the rest of the terminal UI
//! in the binary.

mod json;

pub use json::JsonEventSink;

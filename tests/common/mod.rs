//! Common test utilities for dockerimages CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directories plus a scripted fake runtime
//! - `TestResult`: Captured exit status and output

pub mod env;

pub use env::*;

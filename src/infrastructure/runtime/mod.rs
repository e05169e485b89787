//! Infrastructure implementations for ContainerRuntime

mod cli;

pub use cli::{CliRuntime, OutputMode, DEFAULT_RUNTIME};

//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Wires config and flags into runtimes and use cases

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, SourceArgs};
pub use factory::{
    create_pull_use_case, create_runtime, create_save_use_case, ConcretePullUseCase,
    ConcreteSaveUseCase,
};

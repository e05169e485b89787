//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{PullUseCase, SaveUseCase};
use crate::config::Config;
use crate::infrastructure::runtime::OutputMode;
use crate::infrastructure::CliRuntime;

/// Type alias for the concrete PullUseCase with all dependencies
pub type ConcretePullUseCase = PullUseCase<CliRuntime>;

/// Type alias for the concrete SaveUseCase with all dependencies
pub type ConcreteSaveUseCase = SaveUseCase<CliRuntime>;

/// Create the runtime adapter.
///
/// `--runtime` beats the configured binary. In JSON mode the child's
/// progress output would corrupt the event stream, so it is captured.
pub fn create_runtime(config: &Config, cli_runtime: Option<&str>, json: bool) -> CliRuntime {
    let program = cli_runtime
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(&config.runtime.binary);

    let output = if json {
        OutputMode::Captured
    } else {
        OutputMode::Inherit
    };

    CliRuntime::new(program).with_output(output)
}

/// Create a pull use case around `runtime`
pub fn create_pull_use_case(runtime: CliRuntime) -> ConcretePullUseCase {
    PullUseCase::new(runtime)
}

/// Create a save use case around `runtime`
pub fn create_save_use_case(runtime: CliRuntime) -> ConcreteSaveUseCase {
    SaveUseCase::new(runtime)
}

//! CLI Runtime
//!
//! Drives a docker-compatible binary (`docker`, `podman`, `nerdctl`) as a
//! subprocess. Exit status is the only success signal.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{
    command_line, inspect_args, list_args, pull_args, save_args, ContainerRuntime, RuntimeError,
};
use crate::domain::value_objects::ImageName;

/// Runtime binary used when nothing else is configured
pub const DEFAULT_RUNTIME: &str = "docker";

/// What happens to the output of `pull` and `save`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to our stdout/stderr (progress bars included)
    #[default]
    Inherit,
    /// Child stdout discarded, stderr captured for error messages
    Captured,
}

/// Container runtime backed by its command line interface
#[derive(Debug, Clone)]
pub struct CliRuntime {
    program: String,
    output: OutputMode,
}

impl CliRuntime {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            output: OutputMode::Inherit,
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check if the runtime binary can be started at all
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> RuntimeError {
        RuntimeError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    /// Run a long command (pull/save) honoring the output mode.
    fn run(&self, args: &[OsString]) -> Result<(), RuntimeError> {
        let mut cmd = self.command(args);

        let (status, stderr) = match self.output {
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
                let status = cmd.status().map_err(|e| self.spawn_error(e))?;
                (status, None)
            }
            OutputMode::Captured => {
                cmd.stdout(Stdio::null()).stderr(Stdio::piped());
                let output = cmd.output().map_err(|e| self.spawn_error(e))?;
                (output.status, last_line(&output.stderr))
            }
        };

        if !status.success() {
            return Err(RuntimeError::Failed {
                command: command_line(&self.program, args),
                code: status.code(),
                stderr,
            });
        }
        Ok(())
    }
}

impl Default for CliRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl ContainerRuntime for CliRuntime {
    fn name(&self) -> &str {
        &self.program
    }

    fn image_exists(&self, image: &ImageName) -> Result<bool, RuntimeError> {
        let status = self
            .command(&inspect_args(image))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.spawn_error(e))?;
        Ok(status.success())
    }

    fn pull(&self, image: &ImageName, platform: Option<&str>) -> Result<(), RuntimeError> {
        self.run(&pull_args(image, platform))
    }

    fn save(&self, output: &Path, images: &[ImageName]) -> Result<(), RuntimeError> {
        self.run(&save_args(output, images))
    }

    fn list_images(&self) -> Result<Vec<String>, RuntimeError> {
        let args = list_args();
        let output = self
            .command(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(RuntimeError::Failed {
                command: command_line(&self.program, &args),
                code: output.status.code(),
                stderr: last_line(&output.stderr),
            });
        }

        Ok(parse_image_listing(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse `images --format {{.Repository}}:{{.Tag}}` output.
///
/// Untagged entries (`<none>`) cannot be saved by name and are dropped.
fn parse_image_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("<none>"))
        .map(str::to_string)
        .collect()
}

fn last_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .rfind(|l| !l.is_empty())
        .map(str::to_string)
}

//! Container runtime port
//!
//! Everything image-related is delegated to an external runtime CLI
//! (`docker`, `podman`, ...). This trait is the seam between the use cases
//! and that binary.

use std::ffi::OsString;
use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::ImageName;

/// Failure talking to the runtime binary
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The binary could not be started (not installed, not executable)
    #[error("could not run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The binary ran and exited unsuccessfully
    #[error("{}", describe_failure(command, *code, stderr.as_deref()))]
    Failed {
        command: String,
        /// `None` when the child was killed by a signal
        code: Option<i32>,
        /// Last line of captured stderr, when stderr was not inherited
        stderr: Option<String>,
    },
}

fn describe_failure(command: &str, code: Option<i32>, stderr: Option<&str>) -> String {
    let mut msg = match code {
        Some(code) => format!("`{}` exited with status {}", command, code),
        None => format!("`{}` was terminated by a signal", command),
    };
    if let Some(line) = stderr.filter(|s| !s.is_empty()) {
        msg.push_str(": ");
        msg.push_str(line);
    }
    msg
}

/// Abstract container runtime
///
/// Implementations:
/// - `CliRuntime` - spawns the runtime binary
/// - `FakeRuntime` - records calls (tests only)
pub trait ContainerRuntime {
    /// Binary name, for display
    fn name(&self) -> &str;

    /// `image inspect`: true when the image is present locally
    fn image_exists(&self, image: &ImageName) -> Result<bool, RuntimeError>;

    /// `pull [--platform <p>] <image>`
    fn pull(&self, image: &ImageName, platform: Option<&str>) -> Result<(), RuntimeError>;

    /// `save -o <output> <images...>`
    fn save(&self, output: &Path, images: &[ImageName]) -> Result<(), RuntimeError>;

    /// `images --format {{.Repository}}:{{.Tag}}`, without dangling entries
    fn list_images(&self) -> Result<Vec<String>, RuntimeError>;
}

impl<T: ContainerRuntime + ?Sized> ContainerRuntime for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn image_exists(&self, image: &ImageName) -> Result<bool, RuntimeError> {
        (**self).image_exists(image)
    }

    fn pull(&self, image: &ImageName, platform: Option<&str>) -> Result<(), RuntimeError> {
        (**self).pull(image, platform)
    }

    fn save(&self, output: &Path, images: &[ImageName]) -> Result<(), RuntimeError> {
        (**self).save(output, images)
    }

    fn list_images(&self) -> Result<Vec<String>, RuntimeError> {
        (**self).list_images()
    }
}

/// Go template passed to `images --format`
pub const LIST_FORMAT: &str = "{{.Repository}}:{{.Tag}}";

pub fn inspect_args(image: &ImageName) -> Vec<OsString> {
    vec!["image".into(), "inspect".into(), image.as_str().into()]
}

pub fn pull_args(image: &ImageName, platform: Option<&str>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["pull".into()];
    if let Some(platform) = platform {
        args.push("--platform".into());
        args.push(platform.into());
    }
    args.push(image.as_str().into());
    args
}

pub fn save_args(output: &Path, images: &[ImageName]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["save".into(), "-o".into(), output.into()];
    args.extend(images.iter().map(|i| OsString::from(i.as_str())));
    args
}

pub fn list_args() -> Vec<OsString> {
    vec!["images".into(), "--format".into(), LIST_FORMAT.into()]
}

/// Human-readable command line, for messages and dry runs.
pub fn command_line(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Outcome of `ensure_present`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    AlreadyPresent,
    Pulled,
}

/// Pull `image` unless the runtime already has it.
///
/// The presence check does not look at the platform; an image that exists
/// locally for another architecture is not pulled again.
pub fn ensure_present<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    image: &ImageName,
    platform: Option<&str>,
) -> Result<Presence, RuntimeError> {
    if runtime.image_exists(image)? {
        return Ok(Presence::AlreadyPresent);
    }
    runtime.pull(image, platform)?;
    Ok(Presence::Pulled)
}

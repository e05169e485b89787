//! Image name value object
//!
//! An `ImageName` is whatever the runtime accepts as a reference
//! (`nginx`, `nginx:1.25`, `ghcr.io/org/app@sha256:...`). We only reject what
//! can never be a reference: empty strings and embedded whitespace.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{ImagesError, ImagesResult};

/// Validated container image reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ImageName(String);

impl ImageName {
    /// Trim and validate a raw image reference.
    pub fn parse(raw: &str, origin: &ImageOrigin) -> ImagesResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ImagesError::InvalidImageName {
                name: raw.to_string(),
                origin: origin.clone(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File stem used for a per-image archive: `/` and `:` become `_`.
    ///
    /// `library/nginx:1.25` -> `library_nginx_1.25`
    pub fn archive_stem(&self) -> String {
        self.0.replace(['/', ':'], "_")
    }
}

impl AsRef<str> for ImageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an image name was collected from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageOrigin {
    /// Positional CLI argument
    Argument,
    /// Line of an image list file (1-based)
    File { path: PathBuf, line: usize },
    /// `services.<service>.image` of a compose file
    Compose { path: PathBuf, service: String },
    /// Ticked in the interactive picker
    Interactive,
}

impl fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageOrigin::Argument => write!(f, "command line"),
            ImageOrigin::File { path, line } => write!(f, "{}:{}", path.display(), line),
            ImageOrigin::Compose { path, service } => {
                write!(f, "{} (service '{}')", path.display(), service)
            }
            ImageOrigin::Interactive => write!(f, "interactive selection"),
        }
    }
}

/// An image name together with the source it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectedImage {
    pub name: ImageName,
    pub origin: ImageOrigin,
}

impl CollectedImage {
    pub fn new(name: ImageName, origin: ImageOrigin) -> Self {
        Self { name, origin }
    }
}

impl AsRef<str> for CollectedImage {
    fn as_ref(&self) -> &str {
        self.name.as_str()
    }
}

//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ImagesResult;
use crate::infrastructure::runtime::DEFAULT_RUNTIME;

use super::loader;

/// Container runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Docker-compatible binary (name on PATH or absolute path)
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Default `--platform` for pulls
    #[serde(default)]
    pub platform: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            platform: None,
        }
    }
}

fn default_binary() -> String {
    DEFAULT_RUNTIME.to_string()
}

/// Defaults for `save`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Output directory for archives
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub merge: bool,

    #[serde(default)]
    pub gzip: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            merge: false,
            gzip: false,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub save: SaveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys.
    pub fn load(path: &Path) -> ImagesResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }
}

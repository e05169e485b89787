//! Configuration module for dockerimages
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOCKERIMAGES_*)
//! 3. Project config (./.dockerimages.toml)
//! 4. User config (~/.config/dockerimages/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! The first config file found wins; files are not merged with each other.

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, with_env_overrides, with_env_overrides_from, ConfigWarning,
    user_config_dir, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, RuntimeConfig, SaveConfig};

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImagesError, ImagesResult};

use super::types::{ColorMode, Config};

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".dockerimages.toml";

const USER_CONFIG_DIR: &str = "dockerimages";
const USER_CONFIG_FILE: &str = "config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key not recognised by the config schema
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// An implicitly discovered config file was skipped
    Skipped { file: PathBuf, message: String },
}

/// Result of resolving the config hierarchy
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ImagesResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ImagesError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ImagesError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(&dotted).to_string();
            ConfigWarning::UnknownKey {
                line: line_of(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config hierarchy.
///
/// `explicit` (from `--config`) must load. Otherwise the project file in
/// `project_root` wins over the user file in `user_dir`; a broken implicit
/// file becomes a warning and the next layer is tried. Environment overrides
/// are applied last.
pub fn load_layered(
    project_root: &Path,
    user_dir: Option<&Path>,
    explicit: Option<&Path>,
) -> ImagesResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            source: Some(path.to_path_buf()),
            warnings,
        });
    }

    let mut candidates = vec![project_root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = user_dir {
        candidates.push(dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
    }

    let mut skipped = Vec::new();
    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, mut warnings)) => {
                skipped.append(&mut warnings);
                return Ok(LoadedConfig {
                    config: with_env_overrides(config),
                    source: Some(candidate),
                    warnings: skipped,
                });
            }
            Err(err) => skipped.push(ConfigWarning::Skipped {
                file: candidate,
                message: err.to_string(),
            }),
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: skipped,
    })
}

/// User config directory (`$XDG_CONFIG_HOME`, else the platform default)
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Apply environment variable overrides (DOCKERIMAGES_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // DOCKERIMAGES_RUNTIME
    if let Some(binary) = get_env("DOCKERIMAGES_RUNTIME").filter(|v| !v.trim().is_empty()) {
        config.runtime.binary = binary.trim().to_string();
    }

    // DOCKERIMAGES_PLATFORM
    if let Some(platform) = get_env("DOCKERIMAGES_PLATFORM").filter(|v| !v.trim().is_empty()) {
        config.runtime.platform = Some(platform.trim().to_string());
    }

    // DOCKERIMAGES_OUTPUT
    if let Some(output) = get_env("DOCKERIMAGES_OUTPUT").filter(|v| !v.trim().is_empty()) {
        config.save.output = PathBuf::from(output);
    }

    // DOCKERIMAGES_COLOR (auto|always|never); unknown values are ignored
    if let Some(color) = get_env("DOCKERIMAGES_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = color;
    }

    config
}

fn line_of(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|idx| idx + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "runtime", "binary", "platform", "save", "output", "merge", "gzip", "color", "unicode",
    ];

    KNOWN_KEYS
        .iter()
        .map(|candidate| (candidate, edit_distance(unknown, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over bytes (keys are ASCII)
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.bytes().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}

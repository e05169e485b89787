//! Compose manifest reader
//!
//! Only `services.<name>.image` is read; everything else in the manifest is
//! ignored. YAML merge keys (`<<`) are resolved first. Services without an
//! image (build-only) are skipped. Results are ordered by service name so the
//! same file always yields the same list.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::value_objects::{CollectedImage, ImageName, ImageOrigin};
use crate::error::{ImagesError, ImagesResult};

#[derive(Debug, Default, Deserialize)]
struct ComposeManifest {
    #[serde(default)]
    services: Option<BTreeMap<String, Option<ComposeService>>>,
}

#[derive(Debug, Default, Deserialize)]
struct ComposeService {
    #[serde(default)]
    image: Option<String>,
}

/// Read a compose file and collect its service images.
pub fn read_compose_file(path: &Path) -> ImagesResult<Vec<CollectedImage>> {
    let content = fs::read_to_string(path).map_err(|source| ImagesError::ComposeRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_compose(&content, path)
}

/// Parse compose content; `path` is used for origins and error messages.
pub fn parse_compose(content: &str, path: &Path) -> ImagesResult<Vec<CollectedImage>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parse_error = |e: serde_yaml_ng::Error| ImagesError::ComposeParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    // Resolve `<<: *anchor` merge keys before typing the manifest
    let mut value: serde_yaml_ng::Value = serde_yaml_ng::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    value.apply_merge().map_err(parse_error)?;
    let manifest: ComposeManifest = serde_yaml_ng::from_value(value).map_err(parse_error)?;

    let mut images = Vec::new();
    for (service, definition) in manifest.services.unwrap_or_default() {
        let Some(raw) = definition.and_then(|d| d.image) else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        let origin = ImageOrigin::Compose {
            path: path.to_path_buf(),
            service,
        };
        let name = ImageName::parse(&raw, &origin)?;
        images.push(CollectedImage::new(name, origin));
    }
    Ok(images)
}

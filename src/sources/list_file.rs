//! Line-delimited image list
//!
//! ```text
//! # base images
//! nginx:1.25
//! redis:7
//! ```
//!
//! Whitespace around names is trimmed, blank lines and `#` comments skipped.

use std::fs;
use std::path::Path;

use crate::domain::value_objects::{CollectedImage, ImageName, ImageOrigin};
use crate::error::{ImagesError, ImagesResult};

/// Read and parse an image list file.
pub fn read_image_list(path: &Path) -> ImagesResult<Vec<CollectedImage>> {
    let content = fs::read_to_string(path).map_err(|source| ImagesError::ImageListRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_image_list(&content, path)
}

/// Parse image list content; `path` is only used for origins.
pub fn parse_image_list(content: &str, path: &Path) -> ImagesResult<Vec<CollectedImage>> {
    let mut images = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let origin = ImageOrigin::File {
            path: path.to_path_buf(),
            line: idx + 1,
        };
        let name = ImageName::parse(trimmed, &origin)?;
        images.push(CollectedImage::new(name, origin));
    }
    Ok(images)
}

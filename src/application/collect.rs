//! Image collection
//!
//! Sources are read in a fixed order: CLI arguments, image list file,
//! compose file, then (save only) the interactive picker. The merged list is
//! deduplicated keeping first occurrences. File errors surface before the
//! runtime is ever invoked.

use std::path::PathBuf;

use crate::domain::ports::{ContainerRuntime, ImagePicker};
use crate::domain::services::dedupe;
use crate::domain::value_objects::{CollectedImage, ImageName, ImageOrigin};
use crate::error::{ImagesError, ImagesResult};
use crate::sources::{read_compose_file, read_image_list};

/// Non-interactive image sources
#[derive(Debug, Clone, Default)]
pub struct ImageSources {
    /// Positional arguments
    pub args: Vec<String>,
    /// `--file`: one image per line
    pub images_file: Option<PathBuf>,
    /// `--compose`: compose manifest
    pub compose_file: Option<PathBuf>,
}

impl ImageSources {
    fn read(&self) -> ImagesResult<Vec<CollectedImage>> {
        let mut images = Vec::new();

        for arg in &self.args {
            let name = ImageName::parse(arg, &ImageOrigin::Argument)?;
            images.push(CollectedImage::new(name, ImageOrigin::Argument));
        }

        if let Some(path) = &self.images_file {
            images.extend(read_image_list(path)?);
        }

        if let Some(path) = &self.compose_file {
            images.extend(read_compose_file(path)?);
        }

        Ok(images)
    }
}

/// Collect images from arguments and files.
pub fn collect_images(sources: &ImageSources) -> ImagesResult<Vec<CollectedImage>> {
    finish(sources.read()?)
}

/// Collect images from arguments and files, then let the user add local
/// images through `picker`.
pub fn collect_images_with_picker<R, P>(
    sources: &ImageSources,
    runtime: &R,
    picker: &P,
) -> ImagesResult<Vec<CollectedImage>>
where
    R: ContainerRuntime + ?Sized,
    P: ImagePicker + ?Sized,
{
    let mut images = sources.read()?;
    images.extend(pick_local_images(runtime, picker)?);
    finish(images)
}

fn pick_local_images<R, P>(runtime: &R, picker: &P) -> ImagesResult<Vec<CollectedImage>>
where
    R: ContainerRuntime + ?Sized,
    P: ImagePicker + ?Sized,
{
    let available = runtime.list_images().map_err(ImagesError::ListImages)?;
    if available.is_empty() {
        return Err(ImagesError::NoLocalImages);
    }

    let selected = picker.pick(&available)?;
    if selected.is_empty() {
        return Err(ImagesError::NoSelection);
    }

    selected
        .iter()
        .map(|raw| {
            let name = ImageName::parse(raw, &ImageOrigin::Interactive)?;
            Ok(CollectedImage::new(name, ImageOrigin::Interactive))
        })
        .collect()
}

fn finish(images: Vec<CollectedImage>) -> ImagesResult<Vec<CollectedImage>> {
    let images = dedupe(images);
    if images.is_empty() {
        return Err(ImagesError::NoImages);
    }
    Ok(images)
}

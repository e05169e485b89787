use dockerimages::{ImageOrigin, ImagesError, RuntimeError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

const SOURCES_HINT: &str =
    "Pass image names as arguments, or use --file, --compose, or --interactive (save only).";

/// Stable identifier for the JSON `error` event
fn error_code(err: &ImagesError) -> &'static str {
    match err {
        ImagesError::NoImages => "no_images",
        ImagesError::ImageListRead { .. } => "image_list_read",
        ImagesError::ComposeRead { .. } => "compose_read",
        ImagesError::ComposeParse { .. } => "compose_parse",
        ImagesError::InvalidImageName { .. } => "invalid_image_name",
        ImagesError::NoLocalImages => "no_local_images",
        ImagesError::NotInteractive => "not_interactive",
        ImagesError::SelectionCancelled => "cancelled",
        ImagesError::NoSelection => "no_selection",
        ImagesError::Selection(_) => "selection",
        ImagesError::ListImages(_) => "list_images",
        ImagesError::Pull { .. } => "pull",
        ImagesError::Save { .. } => "save",
        ImagesError::Compress { .. } => "compress",
        ImagesError::Config { .. } => "config",
        ImagesError::Io(_) => "io",
    }
}

fn runtime_source(err: &ImagesError) -> Option<&RuntimeError> {
    match err {
        ImagesError::ListImages(source)
        | ImagesError::Pull { source, .. }
        | ImagesError::Save { source, .. } => Some(source),
        _ => None,
    }
}

pub fn format_images_error(
    err: &ImagesError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = ErrorBlock::new(err.to_string());

    let block = match err {
        ImagesError::InvalidImageName {
            origin: ImageOrigin::File { path, line },
            ..
        } => block
            .at(path, Some(*line))
            .with_file_context(1)
            .with_fix("Put one image name per line; names cannot contain spaces."),
        ImagesError::InvalidImageName { .. } => {
            block.with_fix("Image names cannot be empty or contain spaces.")
        }
        ImagesError::ImageListRead { path, .. } => {
            block.at(path, None).with_fix("Check the --file path.")
        }
        ImagesError::ComposeRead { path, .. } => {
            block.at(path, None).with_fix("Check the --compose path.")
        }
        ImagesError::ComposeParse { path, .. } => block
            .at(path, None)
            .with_fix("Expected a top-level 'services:' map whose entries may set 'image:'."),
        ImagesError::Config { path, .. } => block
            .at(path, None)
            .with_fix("Fix the TOML, or point --config at another file."),
        ImagesError::NoImages => block.with_fix(SOURCES_HINT),
        ImagesError::NoLocalImages => {
            block.with_fix("Pull or build images first, or name them explicitly.")
        }
        ImagesError::NotInteractive => {
            block.with_fix("Run from a terminal, or name the images instead of using --interactive.")
        }
        other => match runtime_source(other) {
            Some(RuntimeError::Spawn { program, .. }) => block.with_fix(format!(
                "Is '{}' installed and on PATH? Choose another runtime with --runtime or DOCKERIMAGES_RUNTIME.",
                program
            )),
            _ => block,
        },
    };

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    if let Some(images) = err.downcast_ref::<ImagesError>() {
        return format_images_error(images, ui.color, ui.unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let code = err
            .downcast_ref::<ImagesError>()
            .map(error_code)
            .unwrap_or("error");
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "code": code,
            "message": err.to_string(),
        }));
        return;
    }

    eprint!("{}", format_error(err, ui));
}

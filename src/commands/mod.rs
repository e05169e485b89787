//! Command handlers for the `dockerimages` binary.

pub mod pull;
pub mod save;
pub mod version;

use dockerimages::config::Config;
use dockerimages::infrastructure::JsonEventSink;
use dockerimages::presentation::SourceArgs;
use dockerimages::{ImageEventSink, ImageSources};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

pub(crate) fn image_sources(sources: &SourceArgs) -> ImageSources {
    ImageSources {
        args: sources.images.clone(),
        images_file: sources.file.clone(),
        compose_file: sources.compose.clone(),
    }
}

/// `--platform` beats `DOCKERIMAGES_PLATFORM` beats `runtime.platform`
pub(crate) fn resolve_platform(sources: &SourceArgs, config: &Config) -> Option<String> {
    sources
        .platform
        .clone()
        .or_else(|| config.runtime.platform.clone())
        .filter(|p| !p.trim().is_empty())
}

pub(crate) fn event_sink(command: &'static str, ui: &UiContext) -> Box<dyn ImageEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        Box::new(ConsoleEventSink::stdout(*ui))
    }
}

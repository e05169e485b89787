use std::path::PathBuf;

use anyhow::Result;
use dockerimages::application::collect_images_with_picker;
use dockerimages::config::Config;
use dockerimages::infrastructure::InteractivePicker;
use dockerimages::presentation::{create_runtime, create_save_use_case, SourceArgs};
use dockerimages::{collect_images, ContainerRuntime, SaveOptions};

use super::{event_sink, image_sources, resolve_platform};
use crate::ui::context::UiContext;
use crate::ui::views::save::{render_save_header, render_save_summary, SaveHeader};

/// Flags that only `save` takes
#[derive(Debug, Clone, Default)]
pub struct SaveFlags {
    pub output: Option<PathBuf>,
    pub merge: bool,
    pub gzip: bool,
    pub interactive: bool,
}

/// Flags win; switches can only be turned on, never off, from the command line
pub(crate) fn save_options(sources: &SourceArgs, flags: &SaveFlags, config: &Config) -> SaveOptions {
    SaveOptions {
        output_dir: flags
            .output
            .clone()
            .unwrap_or_else(|| config.save.output.clone()),
        merge: flags.merge || config.save.merge,
        gzip: flags.gzip || config.save.gzip,
        platform: resolve_platform(sources, config),
        dry_run: sources.dry_run,
    }
}

pub fn cmd_save(
    sources: &SourceArgs,
    flags: &SaveFlags,
    config: &Config,
    runtime: Option<&str>,
    ui: &UiContext,
) -> Result<()> {
    let runtime = create_runtime(config, runtime, ui.json);

    let images = if flags.interactive {
        let picker = InteractivePicker::new(ui.unicode);
        collect_images_with_picker(&image_sources(sources), &runtime, &picker)?
    } else {
        collect_images(&image_sources(sources))?
    };

    let options = save_options(sources, flags, config);

    if !ui.json {
        let header = SaveHeader {
            runtime: runtime.name(),
            output: &options.output_dir,
            merge: options.merge,
            gzip: options.gzip,
            platform: options.platform.as_deref(),
            dry_run: options.dry_run,
        };
        print!("{}", render_save_header(&header, ui.color, ui.unicode));
    }

    let sink = event_sink("save", ui);
    let report = create_save_use_case(runtime).execute(&images, &options, sink.as_ref())?;

    if !ui.json {
        print!("{}", render_save_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}

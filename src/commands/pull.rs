use anyhow::Result;
use dockerimages::config::Config;
use dockerimages::presentation::{create_pull_use_case, create_runtime, SourceArgs};
use dockerimages::{collect_images, ContainerRuntime, PullOptions};

use super::{event_sink, image_sources, resolve_platform};
use crate::ui::context::UiContext;
use crate::ui::views::pull::{render_pull_header, render_pull_summary};

pub fn cmd_pull(
    sources: &SourceArgs,
    config: &Config,
    runtime: Option<&str>,
    ui: &UiContext,
) -> Result<()> {
    // Sources are read before the runtime is touched
    let images = collect_images(&image_sources(sources))?;

    let runtime = create_runtime(config, runtime, ui.json);
    let options = PullOptions {
        platform: resolve_platform(sources, config),
        dry_run: sources.dry_run,
    };

    if !ui.json {
        print!(
            "{}",
            render_pull_header(
                runtime.name(),
                options.platform.as_deref(),
                options.dry_run,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink = event_sink("pull", ui);
    let report = create_pull_use_case(runtime).execute(&images, &options, sink.as_ref())?;

    if !ui.json {
        print!("{}", render_pull_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}

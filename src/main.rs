//! dockerimages CLI - pull container images and save them to tar archives
//!
//! Usage: dockerimages <COMMAND>
//!
//! Commands:
//!   pull     Pull images that are not present locally
//!   save     Save images to tar files (pulling missing ones first)
//!   version  Show version information

use anyhow::Result;
use clap::Parser;

use dockerimages::config::{load_layered, user_config_dir, Config};
use dockerimages::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::save::SaveFlags;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    // Until a config file is loaded only the flags decide how errors look
    let mut ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());

    if let Err(err) = run(cli, &mut ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn run(cli: Cli, error_ui: &mut UiContext) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let user_dir = user_config_dir();
    let loaded = load_layered(&cwd, user_dir.as_deref(), cli.config.as_deref())?;
    let config = loaded.config;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    *error_ui = ui;
    ui::output::print_config_warnings(&loaded.warnings, &ui);
    if ui.verbose > 0 && !ui.json {
        match &loaded.source {
            Some(path) => eprintln!("Config: {}", path.display()),
            None => eprintln!("Config: defaults"),
        }
    }

    let runtime = cli.runtime.as_deref();
    match cli.command {
        Commands::Pull { sources } => commands::pull::cmd_pull(&sources, &config, runtime, &ui),
        Commands::Save {
            sources,
            output,
            merge,
            gzip,
            interactive,
        } => {
            let flags = SaveFlags {
                output,
                merge,
                gzip,
                interactive,
            };
            commands::save::cmd_save(&sources, &flags, &config, runtime, &ui)
        }
        Commands::Version => commands::version::cmd_version(&config, runtime, &ui),
    }
}

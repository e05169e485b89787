//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --runtime) are inherited by all subcommands
//! - Image sources (`[images...]`, --file, --compose) are shared by `pull` and `save`
//! - Only `save` offers the interactive picker

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// dockerimages - save container images to tar files
#[derive(Parser, Debug)]
#[command(name = "dockerimages")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Images can come from arguments, --file (one per line), --compose (services.*.image),\nor --interactive selection from local images (save only)."
)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.dockerimages.toml, then ~/.config/dockerimages/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Container runtime binary (docker, podman, ...)
    #[arg(long, global = true, value_name = "BIN")]
    pub runtime: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where image names come from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Image names
    #[arg(value_name = "IMAGES")]
    pub images: Vec<String>,

    /// File containing image names (one per line)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Docker compose file path
    #[arg(short, long, value_name = "PATH")]
    pub compose: Option<PathBuf>,

    /// Target platform (e.g., linux/amd64, linux/arm64)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Show the runtime commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pull images that are not present locally
    Pull {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Save images to tar files (pulling missing ones first)
    Save {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output directory for tar files
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Merge all images into a single tar file (images.tar)
        #[arg(short, long)]
        merge: bool,

        /// Compress the output tar files with gzip
        #[arg(short = 'z', long)]
        gzip: bool,

        /// Interactively select from local images
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_pull_with_sources() {
        let cli = Cli::try_parse_from([
            "dockerimages",
            "pull",
            "nginx",
            "redis:7",
            "-f",
            "images.txt",
            "--compose",
            "compose.yml",
            "-p",
            "linux/arm64",
        ])
        .unwrap();

        let Commands::Pull { sources } = cli.command else {
            panic!("Expected Pull command");
        };
        assert_eq!(sources.images, vec!["nginx", "redis:7"]);
        assert_eq!(sources.file, Some(PathBuf::from("images.txt")));
        assert_eq!(sources.compose, Some(PathBuf::from("compose.yml")));
        assert_eq!(sources.platform.as_deref(), Some("linux/arm64"));
        assert!(!sources.dry_run);
    }

    #[test]
    fn test_cli_parse_save_defaults() {
        let cli = Cli::try_parse_from(["dockerimages", "save", "alpine"]).unwrap();
        if let Commands::Save {
            sources,
            output,
            merge,
            gzip,
            interactive,
        } = cli.command
        {
            assert_eq!(sources.images, vec!["alpine"]);
            assert_eq!(output, None);
            assert!(!merge);
            assert!(!gzip);
            assert!(!interactive);
        } else {
            panic!("Expected Save command");
        }
    }

    #[test]
    fn test_cli_parse_save_short_flags() {
        let cli =
            Cli::try_parse_from(["dockerimages", "save", "-o", "out", "-m", "-z", "-i"]).unwrap();
        if let Commands::Save {
            output,
            merge,
            gzip,
            interactive,
            ..
        } = cli.command
        {
            assert_eq!(output, Some(PathBuf::from("out")));
            assert!(merge);
            assert!(gzip);
            assert!(interactive);
        } else {
            panic!("Expected Save command");
        }
    }

    #[test]
    fn test_cli_pull_rejects_interactive() {
        assert!(Cli::try_parse_from(["dockerimages", "pull", "-i"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dockerimages",
            "save",
            "alpine",
            "--json",
            "-vv",
            "--runtime",
            "podman",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.runtime.as_deref(), Some("podman"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["dockerimages"]).is_err());
    }
}

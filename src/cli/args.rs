//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::FramecheckConfig;
use crate::report::ReportFormat;

/// framecheck - find missing frames in rendered image sequences.
#[derive(Debug, Parser)]
#[command(name = "framecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a settings file (layered over ~/.framecheck/config.yml and <DIR>/.framecheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a folder for missing frames (default if no command specified)
    Check(CheckArgs),

    /// Compare the frames of two folders
    Compare(CompareArgs),

    /// Re-check a folder periodically while it renders
    Watch(WatchArgs),

    /// Show resolved settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options that decide which files form the sequence.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Only consider these extensions (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "EXT")]
    pub ext: Vec<String>,

    /// Consider files of every extension
    #[arg(long, conflicts_with = "ext")]
    pub any_ext: bool,

    /// Count every numbered file, whatever its prefix
    #[arg(long)]
    pub loose: bool,
}

impl ScanArgs {
    /// Override settings with the flags that were given.
    pub fn apply(&self, config: &mut FramecheckConfig) {
        if self.any_ext {
            config.formats.clear();
        } else if !self.ext.is_empty() {
            config.formats = self.ext.clone();
        }
        if self.loose {
            config.auto_detect = false;
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Folder to check (defaults to the current directory)
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Show a coverage map of present and missing frames
    #[arg(long)]
    pub map: bool,

    /// Write the report to a file (format from the extension unless --format is given)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format: text, csv, json or html
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Maximum number of missing frames listed one by one
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Exit with status 1 when frames are missing
    #[arg(long)]
    pub fail_on_missing: bool,
}

/// Arguments for the `compare` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompareArgs {
    /// First folder
    pub a: PathBuf,

    /// Second folder
    pub b: PathBuf,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print the comparison as JSON
    #[arg(long)]
    pub json: bool,

    /// Maximum number of frames listed per side
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Folder to watch (defaults to the current directory)
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Seconds between scans
    #[arg(short, long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Stop after this many scans
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Show a coverage map with each report
    #[arg(long)]
    pub map: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Folder whose settings are resolved (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher; folders default to `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn folder(&self, dir: Option<&Path>) -> PathBuf {
        match dir {
            Some(dir) => self.working_dir.join(dir),
            None => self.working_dir.clone(),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, the working directory is checked with default
    /// arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = cli.config.as_deref();

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(
                    &self.folder(args.dir.as_deref()),
                    config,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Compare(args)) => {
                let cmd = super::compare::CompareCommand::new(
                    &self.folder(Some(args.a.as_path())),
                    &self.folder(Some(args.b.as_path())),
                    config,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Watch(args)) => {
                let cmd = super::watch::WatchCommand::new(
                    &self.folder(args.dir.as_deref()),
                    config,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.folder(args.dir.as_deref()),
                    config,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::check::CheckCommand::new(&self.working_dir, config, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

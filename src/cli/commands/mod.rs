//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`framecheck check`, `framecheck watch`)
//! - Shared settings loading in [`settings`]
//! - Shared report rendering in [`display`]

pub mod check;
pub mod compare;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod settings;
pub mod watch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

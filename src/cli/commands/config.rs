//! Config command implementation.
//!
//! The `framecheck config` command shows the resolved settings for a folder
//! and the files they were merged from.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{FramecheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::settings::{load_settings, CONFIG_ERROR_EXIT};

/// The config command implementation.
pub struct ConfigCommand {
    folder: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(folder: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            folder: folder.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = load_settings(&self.folder, self.config_path.as_deref(), ui)? else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| FramecheckError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        let paths = ConfigPaths::discover(&self.folder, self.config_path.as_deref());
        let existing = paths.all_existing();
        if existing.is_empty() {
            ui.raw("# built-in defaults");
        }
        for path in existing {
            ui.raw(&format!("# {}", path.display()));
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| FramecheckError::Other(e.into()))?;
        ui.raw(&yaml);

        Ok(CommandResult::success())
    }
}

//! Check command implementation.
//!
//! The `framecheck check` command scans one folder and reports its missing
//! frames, optionally exporting the report to a file.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::report::{export_report, Report, ReportFormat};
use crate::scan::scan_directory;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_report;
use super::settings::{load_settings, CONFIG_ERROR_EXIT};

/// Exit code for `--fail-on-missing` when frames are missing.
pub const MISSING_FRAMES_EXIT: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    folder: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(folder: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            folder: folder.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Format for stdout when the report is printed rather than shown.
    fn stdout_format(&self) -> Option<ReportFormat> {
        if self.args.json {
            Some(ReportFormat::Json)
        } else if self.args.output.is_none() {
            self.args.format
        } else {
            None
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(mut config) = load_settings(&self.folder, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };
        self.args.scan.apply(&mut config);
        if let Some(limit) = self.args.limit {
            config.missing_list_limit = limit;
        }

        let result = scan_directory(&self.folder, &config.scan_options())?;
        let report = Report::new(&self.folder, result);
        let options = config.report_options();

        match self.stdout_format() {
            Some(format) => ui.raw(&format.render(&report, &options)),
            None => show_report(ui, &report, &options, self.args.map),
        }

        if let Some(path) = &self.args.output {
            let format = self
                .args
                .format
                .unwrap_or_else(|| ReportFormat::from_path(path));
            export_report(path, &report, format, &options)?;
            if !self.args.json {
                ui.success(&format!("Report written to {}", path.display()));
            }
        }

        if self.args.fail_on_missing && report.result.missing_count() > 0 {
            return Ok(CommandResult::failure(MISSING_FRAMES_EXIT));
        }

        Ok(CommandResult::success())
    }
}

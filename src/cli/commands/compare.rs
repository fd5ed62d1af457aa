//! Compare command implementation.
//!
//! The `framecheck compare` command scans two folders one after the other
//! and lists the frame numbers only one of them holds.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::CompareArgs;
use crate::error::{FramecheckError, Result};
use crate::report::{format_frame_list, Report};
use crate::scan::scan_directory;
use crate::sequence::{compare, Comparison};
use crate::ui::{Align, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::settings::{load_settings, CONFIG_ERROR_EXIT};

/// The compare command implementation.
pub struct CompareCommand {
    a: PathBuf,
    b: PathBuf,
    config_path: Option<PathBuf>,
    args: CompareArgs,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    a: String,
    b: String,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

impl CompareCommand {
    /// Create a new compare command. Settings are resolved for folder `a`.
    pub fn new(a: &Path, b: &Path, config_path: Option<&Path>, args: CompareArgs) -> Self {
        Self {
            a: a.to_path_buf(),
            b: b.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn show_table(&self, ui: &mut dyn UserInterface, a: &Report, b: &Report, cmp: &Comparison) {
        if !ui.output_mode().shows_report() {
            return;
        }
        let mut table = Table::new(&["Set", "Frames"]).align(1, Align::Right);
        table.add_row(&["A".to_string(), cmp.a_count.to_string()]);
        table.add_row(&["B".to_string(), cmp.b_count.to_string()]);
        table.add_row(&["Common".to_string(), cmp.common.to_string()]);
        table.add_row(&["Only in A".to_string(), cmp.only_in_a.len().to_string()]);
        table.add_row(&["Only in B".to_string(), cmp.only_in_b.len().to_string()]);

        ui.show_header("Sequence Comparison");
        ui.show_field("A", &format!("{} ({})", a.folder.display(), a.sequence_label()));
        ui.show_field("B", &format!("{} ({})", b.folder.display(), b.sequence_label()));
        ui.message("");
        ui.message(&table.render());
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(mut config) = load_settings(&self.a, self.config_path.as_deref(), ui)? else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };
        self.args.scan.apply(&mut config);
        let limit = self.args.limit.unwrap_or(config.missing_list_limit);
        let options = config.scan_options();

        let a = Report::new(&self.a, scan_directory(&self.a, &options)?);
        let b = Report::new(&self.b, scan_directory(&self.b, &options)?);
        let cmp = compare(&a.result, &b.result);

        if self.args.json {
            let output = CompareOutput {
                a: a.folder.display().to_string(),
                b: b.folder.display().to_string(),
                comparison: &cmp,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| FramecheckError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        self.show_table(ui, &a, &b, &cmp);

        if !cmp.only_in_a.is_empty() {
            ui.show_field(
                "Only in A",
                &format_frame_list(&cmp.only_in_a, a.result.padding(), limit),
            );
        }
        if !cmp.only_in_b.is_empty() {
            ui.show_field(
                "Only in B",
                &format_frame_list(&cmp.only_in_b, b.result.padding(), limit),
            );
        }

        if cmp.is_identical() {
            ui.success(&format!("Both folders hold the same {} frames", cmp.common));
        } else {
            ui.warning(&format!(
                "Frame sets differ: {} only in A, {} only in B",
                cmp.only_in_a.len(),
                cmp.only_in_b.len()
            ));
        }

        Ok(CommandResult::success())
    }
}

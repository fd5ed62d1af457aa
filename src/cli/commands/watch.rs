//! Watch command implementation.
//!
//! The `framecheck watch` command re-scans a folder at a fixed interval
//! while a render is still writing frames. The report is shown on the
//! first scan and again whenever the result changes.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::cli::args::WatchArgs;
use crate::config::validator::MAX_WATCH_INTERVAL;
use crate::error::Result;
use crate::report::Report;
use crate::scan::scan_directory;
use crate::sequence::ScanResult;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_report;
use super::settings::{load_settings, CONFIG_ERROR_EXIT};

/// Granularity of the wait between scans.
const POLL_STEP: Duration = Duration::from_millis(100);

/// The watch command implementation.
pub struct WatchCommand {
    folder: PathBuf,
    config_path: Option<PathBuf>,
    args: WatchArgs,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(folder: &Path, config_path: Option<&Path>, args: WatchArgs) -> Self {
        Self {
            folder: folder.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Run the scan loop until `running` is cleared or `--count` is reached.
    pub fn run(&self, ui: &mut dyn UserInterface, running: &AtomicBool) -> Result<CommandResult> {
        let Some(mut config) = load_settings(&self.folder, self.config_path.as_deref(), ui)? else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };
        self.args.scan.apply(&mut config);
        let interval = Duration::from_secs(
            self.args
                .interval
                .unwrap_or(config.watch_interval)
                .clamp(1, MAX_WATCH_INTERVAL),
        );
        let scan_options = config.scan_options();
        let report_options = config.report_options();

        let mut previous: Option<ScanResult> = None;
        let mut scans = 0usize;

        loop {
            scans += 1;
            match scan_directory(&self.folder, &scan_options) {
                Ok(result) => {
                    if previous.as_ref() != Some(&result) {
                        let report = Report::new(&self.folder, result.clone());
                        show_report(ui, &report, &report_options, self.args.map);
                        previous = Some(result);
                    } else {
                        tracing::debug!("Scan {} unchanged", scans);
                    }
                }
                // Only the first scan must succeed.
                Err(e) if previous.is_some() => ui.error(&e.to_string()),
                Err(e) => return Err(e),
            }

            if self.args.count.is_some_and(|n| scans >= n) {
                break;
            }
            if !wait(ui, interval, running, &self.folder) {
                break;
            }
        }

        ui.success(&format!("Stopped watching after {} scan(s)", scans));
        Ok(CommandResult::success())
    }
}

/// Sleep for `interval` unless interrupted. Returns `false` on interrupt.
fn wait(
    ui: &mut dyn UserInterface,
    interval: Duration,
    running: &AtomicBool,
    folder: &Path,
) -> bool {
    let mut spinner = ui.start_spinner(&format!(
        "Watching {} every {}s (Ctrl+C to stop)",
        folder.display(),
        interval.as_secs()
    ));
    let deadline = Instant::now() + interval;
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(POLL_STEP.min(deadline - now));
    }
    spinner.clear();
    running.load(Ordering::SeqCst)
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let running = Arc::new(AtomicBool::new(true));
        let r = running.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            r.store(false, Ordering::SeqCst);
        }) {
            tracing::warn!("Failed to set Ctrl+C handler: {}", e);
        }

        self.run(ui, &running)
    }
}

//! Configuration schema.
//!
//! All keys are optional in a settings file; missing keys take the
//! defaults below.
//!
//! ```yaml
//! formats: [exr, png]
//! auto_detect: true
//! missing_list_limit: 200
//! watch_interval: 5
//! map_columns: 50
//! output: normal
//! ```

use serde::{Deserialize, Serialize};

use crate::report::ReportOptions;
use crate::scan::{ExtensionFilter, ScanOptions, DEFAULT_EXTENSIONS};
use crate::sequence::Grouping;

/// Output verbosity as written in a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Resolved framecheck settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramecheckConfig {
    /// Extensions (without dot) that take part in a scan. Empty = all files.
    pub formats: Vec<String>,

    /// Detect the dominant prefix; `false` counts every numbered file.
    pub auto_detect: bool,

    /// Maximum number of missing frames listed individually in a report.
    pub missing_list_limit: usize,

    /// Seconds between scans in watch mode.
    pub watch_interval: u64,

    /// Cells per row of the coverage map.
    pub map_columns: usize,

    /// Default output verbosity.
    pub output: OutputMode,
}

impl Default for FramecheckConfig {
    fn default() -> Self {
        Self {
            formats: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            auto_detect: true,
            missing_list_limit: 200,
            watch_interval: 5,
            map_columns: 50,
            output: OutputMode::Normal,
        }
    }
}

impl FramecheckConfig {
    /// Extension filter described by `formats`.
    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::only(&self.formats)
    }

    /// Grouping described by `auto_detect`.
    pub fn grouping(&self) -> Grouping {
        if self.auto_detect {
            Grouping::Dominant
        } else {
            Grouping::Loose
        }
    }

    /// Scan options for these settings.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extension_filter(),
            grouping: self.grouping(),
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            missing_list_limit: self.missing_list_limit,
            map_columns: self.map_columns,
        }
    }
}

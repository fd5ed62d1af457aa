//! framecheck - find missing frames in rendered image sequences.
//!
//! Renders write one numbered file per frame (`shot_0001.exr`,
//! `shot_0002.exr`, ...). framecheck lists a folder, detects the dominant
//! sequence, and reports the frame numbers that are missing between the
//! first and last frame on disk.
//!
//! # Modules
//!
//! - [`sequence`] - Filename tokenizing, sequence detection and gap analysis
//! - [`scan`] - Directory listing and extension filtering
//! - [`report`] - Text, CSV, JSON and HTML reports, coverage maps
//! - [`config`] - Layered YAML settings
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output, spinners and test doubles
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use framecheck::sequence::{analyze, AnalyzeOptions};
//!
//! let names = ["beauty_1001.exr", "beauty_1002.exr", "beauty_1005.exr", "notes.txt"];
//! let result = analyze(&names, &AnalyzeOptions::default());
//!
//! assert_eq!(result.pattern().as_deref(), Some("beauty_####.exr"));
//! assert_eq!(result.missing_frames(), &[1003, 1004]);
//! assert_eq!(result.unrecognized(), &["notes.txt".to_string()]);
//! ```
//!
//! For directory scans, see [`scan::scan_directory`].

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod sequence;
pub mod ui;

pub use error::{FramecheckError, Result};

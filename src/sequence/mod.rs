//! Frame sequence detection.
//!
//! This is the core of framecheck: a pure function from a directory
//! listing to a [`ScanResult`].
//!
//! - [`tokenizer`] - Classify one filename as a frame or not
//! - [`analyzer`] - Group frames, pick the sequence, find the gaps
//! - [`result`] - The immutable scan result and missing-block helpers
//! - [`compare`] - Frame set differences between two scans

pub mod analyzer;
pub mod compare;
pub mod result;
pub mod tokenizer;

pub use analyzer::{analyze, gap_blocks, missing_frames, AnalyzeOptions, Grouping, MAX_LISTED_SPAN};
pub use compare::{compare, Comparison};
pub use result::{summarize_missing_blocks, FrameBlock, ScanResult, SequenceKey};
pub use tokenizer::{tokenize, FrameFile, Token};

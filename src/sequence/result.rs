//! Scan results.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Grouping key for frames: the literal prefix plus the extension.
///
/// Ordering is lexicographic on `(prefix, extension)`, which is also the
/// tie-break order when two groups hold the same number of frames.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SequenceKey {
    pub prefix: String,
    pub extension: String,
}

impl SequenceKey {
    /// Create a key from a prefix and an extension (with its dot).
    pub fn new(prefix: &str, extension: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            extension: extension.to_string(),
        }
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.prefix, self.extension)
    }
}

/// A contiguous run of missing frames, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameBlock {
    pub start: u64,
    pub end: u64,
}

impl FrameBlock {
    /// Number of frames in the block.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Blocks always hold at least one frame.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Render as `start` or `start-end`, zero-padded to `padding` digits.
    pub fn format(&self, padding: usize) -> String {
        if self.start == self.end {
            format!("{:0width$}", self.start, width = padding)
        } else {
            format!(
                "{:0width$}-{:0width$}",
                self.start,
                self.end,
                width = padding
            )
        }
    }
}

impl fmt::Display for FrameBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(0))
    }
}

/// Collapse an ascending list of missing frames into contiguous blocks.
pub fn summarize_missing_blocks(missing: &[u64]) -> Vec<FrameBlock> {
    let mut blocks: Vec<FrameBlock> = Vec::new();
    for &n in missing {
        match blocks.last_mut() {
            Some(block) if block.end + 1 == n => block.end = n,
            _ => blocks.push(FrameBlock { start: n, end: n }),
        }
    }
    blocks
}

/// Outcome of analyzing one directory listing.
///
/// Built once by the analyzer and read-only afterwards. An empty result
/// (no frames found) has no prefix, extension or range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub(crate) prefix: Option<String>,
    pub(crate) extension: Option<String>,
    pub(crate) padding: usize,
    pub(crate) min_frame: Option<u64>,
    pub(crate) max_frame: Option<u64>,
    pub(crate) present_frames: BTreeSet<u64>,
    pub(crate) missing_frames: Vec<u64>,
    pub(crate) missing_blocks: Vec<FrameBlock>,
    pub(crate) range_too_large: bool,
    pub(crate) unrecognized: Vec<String>,
    pub(crate) ambiguous_with: Vec<SequenceKey>,
}

impl ScanResult {
    /// Literal filename text before the frame number.
    ///
    /// `None` for an empty result and for loose scans.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Sequence extension including the dot.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Widest digit count seen in the sequence.
    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn min_frame(&self) -> Option<u64> {
        self.min_frame
    }

    pub fn max_frame(&self) -> Option<u64> {
        self.max_frame
    }

    /// Inclusive `(min, max)` frame range, if any frames were found.
    pub fn range(&self) -> Option<(u64, u64)> {
        Some((self.min_frame?, self.max_frame?))
    }

    pub fn present_frames(&self) -> &BTreeSet<u64> {
        &self.present_frames
    }

    /// Missing frame numbers in ascending order.
    ///
    /// Empty when [`is_range_too_large`](Self::is_range_too_large) is set;
    /// use [`missing_blocks`](Self::missing_blocks) and
    /// [`missing_count`](Self::missing_count) instead.
    pub fn missing_frames(&self) -> &[u64] {
        &self.missing_frames
    }

    /// Number of missing frames, whether or not they were listed.
    pub fn missing_count(&self) -> u64 {
        self.missing_blocks.iter().map(FrameBlock::len).sum()
    }

    /// True when the range was too wide to list every missing frame.
    pub fn is_range_too_large(&self) -> bool {
        self.range_too_large
    }

    /// Files that were not part of the chosen sequence, sorted.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Other sequences that had as many frames as the chosen one.
    pub fn ambiguous_with(&self) -> &[SequenceKey] {
        &self.ambiguous_with
    }

    /// True when no sequence was found.
    pub fn is_empty(&self) -> bool {
        self.present_frames.is_empty()
    }

    /// True when a sequence was found and has no gaps.
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.missing_blocks.is_empty()
    }

    /// True when another group tied with the chosen sequence.
    pub fn is_ambiguous(&self) -> bool {
        !self.ambiguous_with.is_empty()
    }

    /// Number of distinct frames present.
    pub fn frame_count(&self) -> usize {
        self.present_frames.len()
    }

    /// Number of frames the range should hold (`max - min + 1`).
    ///
    /// Saturates at `u64::MAX` for the full `0..=u64::MAX` range.
    pub fn expected_count(&self) -> u64 {
        self.range()
            .map(|(min, max)| max.saturating_sub(min).saturating_add(1))
            .unwrap_or(0)
    }

    /// Percentage of the range that is present, 0 for an empty result.
    pub fn completeness(&self) -> f64 {
        let expected = self.expected_count();
        if expected == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / expected as f64 * 100.0
    }

    /// Missing frames collapsed into contiguous blocks.
    pub fn missing_blocks(&self) -> &[FrameBlock] {
        &self.missing_blocks
    }

    /// Zero-pad a frame number to the sequence padding.
    pub fn format_frame(&self, frame: u64) -> String {
        format!("{:0width$}", frame, width = self.padding)
    }

    /// Filename a given frame would have, when the pattern is known.
    pub fn frame_name(&self, frame: u64) -> Option<String> {
        Some(format!(
            "{}{}{}",
            self.prefix.as_deref()?,
            self.format_frame(frame),
            self.extension.as_deref()?
        ))
    }

    /// Pattern such as `render_####.png`.
    pub fn pattern(&self) -> Option<String> {
        Some(format!(
            "{}{}{}",
            self.prefix.as_deref()?,
            "#".repeat(self.padding),
            self.extension.as_deref()?
        ))
    }
}

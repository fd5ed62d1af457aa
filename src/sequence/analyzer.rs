//! Frame sequence analysis.
//!
//! [`analyze`] turns a directory listing into a [`ScanResult`]:
//!
//! 1. Every name is tokenized into a frame or an unrecognized name.
//! 2. Frames are grouped by prefix and extension.
//! 3. The largest group wins; ties go to the lexicographically smallest key.
//! 4. The missing frames are the gaps between the smallest and largest
//!    frame number of the winning group.
//!
//! Gaps are enumerated between consecutive present frames, so the work is
//! proportional to the number of present plus missing frames. A huge gap
//! (1 to 1,000,000) is still correct, it just allocates every missing number.
//! Ranges wider than [`MAX_LISTED_SPAN`] only keep the missing blocks and
//! set [`ScanResult::is_range_too_large`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::result::{FrameBlock, ScanResult, SequenceKey};
use super::tokenizer::{tokenize, FrameFile, Token};

/// Widest `max - min` for which every missing frame is listed.
pub const MAX_LISTED_SPAN: u64 = 10_000_000;

/// How recognized frames are grouped into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Pick the largest prefix/extension group.
    #[default]
    Dominant,
    /// Count every numbered file, whatever its prefix or extension.
    Loose,
}

/// Options for [`analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub grouping: Grouping,
}

impl AnalyzeOptions {
    /// Options for loose grouping.
    pub fn loose() -> Self {
        Self {
            grouping: Grouping::Loose,
        }
    }
}

/// Analyze a list of filenames from one directory.
///
/// # Example
///
/// ```
/// use framecheck::sequence::{analyze, AnalyzeOptions};
///
/// let names = ["shot_001.png", "shot_002.png", "shot_004.png"];
/// let result = analyze(&names, &AnalyzeOptions::default());
///
/// assert_eq!(result.prefix(), Some("shot_"));
/// assert_eq!(result.extension(), Some(".png"));
/// assert_eq!(result.range(), Some((1, 4)));
/// assert_eq!(result.missing_frames(), &[3]);
/// ```
pub fn analyze<S: AsRef<str>>(names: &[S], options: &AnalyzeOptions) -> ScanResult {
    let mut frames = Vec::new();
    let mut unrecognized = Vec::new();

    for name in names {
        match tokenize(name.as_ref()) {
            Token::Frame(frame) => frames.push(frame),
            Token::Unrecognized(name) => unrecognized.push(name),
        }
    }

    let result = match options.grouping {
        Grouping::Dominant => analyze_dominant(frames, unrecognized),
        Grouping::Loose => analyze_loose(frames, unrecognized),
    };

    tracing::debug!(
        "Analyzed {} names: {} frames, {} missing, {} unrecognized",
        names.len(),
        result.frame_count(),
        result.missing_count(),
        result.unrecognized().len()
    );

    result
}

fn analyze_dominant(frames: Vec<FrameFile>, mut unrecognized: Vec<String>) -> ScanResult {
    let mut groups: BTreeMap<SequenceKey, Vec<FrameFile>> = BTreeMap::new();
    for frame in frames {
        groups.entry(frame.key()).or_default().push(frame);
    }

    let Some(largest) = groups.values().map(Vec::len).max() else {
        unrecognized.sort();
        return ScanResult {
            unrecognized,
            ..Default::default()
        };
    };

    // BTreeMap iterates keys in ascending order, so the first tied group
    // is the lexicographically smallest one.
    let mut tied: Vec<SequenceKey> = groups
        .iter()
        .filter(|(_, members)| members.len() == largest)
        .map(|(key, _)| key.clone())
        .collect();
    let chosen = tied.remove(0);

    let mut sequence = Vec::new();
    for (key, members) in groups {
        if key == chosen {
            sequence = members;
        } else {
            unrecognized.extend(members.into_iter().map(|f| f.name));
        }
    }
    unrecognized.sort();

    build(
        Some(chosen.prefix),
        Some(chosen.extension),
        &sequence,
        unrecognized,
        tied,
    )
}

fn analyze_loose(mut frames: Vec<FrameFile>, mut unrecognized: Vec<String>) -> ScanResult {
    unrecognized.sort();
    frames.sort_by(|a, b| a.name.cmp(&b.name));
    let extension = frames.first().map(|f| f.extension.clone());
    build(None, extension, &frames, unrecognized, Vec::new())
}

fn build(
    prefix: Option<String>,
    extension: Option<String>,
    frames: &[FrameFile],
    unrecognized: Vec<String>,
    ambiguous_with: Vec<SequenceKey>,
) -> ScanResult {
    let present: BTreeSet<u64> = frames.iter().map(|f| f.number).collect();
    let padding = frames.iter().map(|f| f.padding).max().unwrap_or(0);
    let min_frame = present.first().copied();
    let max_frame = present.last().copied();

    let span = match (min_frame, max_frame) {
        (Some(min), Some(max)) => max - min,
        _ => 0,
    };
    let range_too_large = span > MAX_LISTED_SPAN;
    let missing = if range_too_large {
        tracing::warn!(
            "Frame range spans {} frames; listing missing blocks only",
            span
        );
        Vec::new()
    } else {
        missing_frames(&present)
    };

    ScanResult {
        prefix,
        extension,
        padding,
        min_frame,
        max_frame,
        missing_frames: missing,
        missing_blocks: gap_blocks(&present),
        range_too_large,
        present_frames: present,
        unrecognized,
        ambiguous_with,
    }
}

/// Ascending integers between the smallest and largest present frame that
/// are not present themselves.
pub fn missing_frames(present: &BTreeSet<u64>) -> Vec<u64> {
    let mut missing = Vec::new();
    let mut iter = present.iter().copied();
    let Some(mut prev) = iter.next() else {
        return missing;
    };
    for n in iter {
        missing.extend(prev + 1..n);
        prev = n;
    }
    missing
}

/// Gaps between consecutive present frames as blocks.
///
/// Work is proportional to the number of present frames, whatever the
/// size of the gaps.
pub fn gap_blocks(present: &BTreeSet<u64>) -> Vec<FrameBlock> {
    let mut blocks = Vec::new();
    let mut iter = present.iter().copied();
    let Some(mut prev) = iter.next() else {
        return blocks;
    };
    for n in iter {
        if n > prev + 1 {
            blocks.push(FrameBlock {
                start: prev + 1,
                end: n - 1,
            });
        }
        prev = n;
    }
    blocks
}

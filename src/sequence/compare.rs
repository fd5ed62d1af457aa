//! Comparison of two scanned sequences.

use serde::Serialize;

use super::result::ScanResult;

/// Differences between the frame sets of two scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Distinct frames in the first scan.
    pub a_count: usize,
    /// Distinct frames in the second scan.
    pub b_count: usize,
    /// Frames present in both.
    pub common: usize,
    /// Frames only the first scan has, ascending.
    pub only_in_a: Vec<u64>,
    /// Frames only the second scan has, ascending.
    pub only_in_b: Vec<u64>,
}

impl Comparison {
    /// True when both scans hold exactly the same frame numbers.
    pub fn is_identical(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }
}

/// Compare the present frames of two scan results.
pub fn compare(a: &ScanResult, b: &ScanResult) -> Comparison {
    let a_frames = a.present_frames();
    let b_frames = b.present_frames();

    Comparison {
        a_count: a_frames.len(),
        b_count: b_frames.len(),
        common: a_frames.intersection(b_frames).count(),
        only_in_a: a_frames.difference(b_frames).copied().collect(),
        only_in_b: b_frames.difference(a_frames).copied().collect(),
    }
}

//! Coverage map.
//!
//! Lays the frame range out as rows of cells, one cell per frame. Long
//! ranges are bucketed so the map never exceeds [`MAX_ROWS`] rows; a
//! bucketed cell counts as present only when every frame in it exists.

use std::ops::RangeInclusive;

use crate::sequence::ScanResult;

/// Upper bound on the number of rows in a map.
pub const MAX_ROWS: usize = 20;

/// Upper bound on the number of cells per row.
pub const MAX_COLUMNS: usize = 1000;

/// Glyph for a fully present cell.
pub const PRESENT: char = '█';

/// Glyph for a cell with at least one missing frame.
pub const MISSING: char = '░';

/// Present/missing cells for a scanned range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMap {
    columns: usize,
    frames_per_cell: u64,
    first_frame: u64,
    last_frame: u64,
    cells: Vec<bool>,
}

impl CoverageMap {
    /// Build a map with `columns` cells per row, clamped to
    /// `1..=MAX_COLUMNS`.
    ///
    /// Returns `None` for an empty result.
    pub fn build(result: &ScanResult, columns: usize) -> Option<Self> {
        let (first, last) = result.range()?;
        let columns = columns.clamp(1, MAX_COLUMNS);
        let total = result.expected_count();
        let capacity = (columns * MAX_ROWS) as u64;
        let frames_per_cell = total.div_ceil(capacity).max(1);
        let cell_count = total.div_ceil(frames_per_cell);

        let present = result.present_frames();
        let cells = (0..cell_count)
            .map(|i| {
                let start = first + i * frames_per_cell;
                let end = start.saturating_add(frames_per_cell - 1).min(last);
                present.range(start..=end).count() as u64 == end - start + 1
            })
            .collect();

        Some(Self {
            columns,
            frames_per_cell,
            first_frame: first,
            last_frame: last,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of frames each cell stands for.
    pub fn frames_per_cell(&self) -> u64 {
        self.frames_per_cell
    }

    /// `true` for present cells, `false` for cells with gaps.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Frames covered by the cell at `index`.
    pub fn cell_frames(&self, index: usize) -> RangeInclusive<u64> {
        let start = self.first_frame + index as u64 * self.frames_per_cell;
        let end = start
            .saturating_add(self.frames_per_cell - 1)
            .min(self.last_frame);
        start..=end
    }

    /// Cells grouped into rows.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.columns)
    }

    /// Render the map as text lines.
    pub fn render_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|&present| if present { PRESENT } else { MISSING })
                    .collect::<String>()
            })
            .collect()
    }

    /// Legend line describing the scale.
    pub fn legend(&self) -> String {
        let unit = if self.frames_per_cell == 1 {
            "1 frame".to_string()
        } else {
            format!("{} frames", self.frames_per_cell)
        };
        format!("{} present  {} missing  (1 cell = {})", PRESENT, MISSING, unit)
    }
}

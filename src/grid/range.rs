//! Rectangular range expansion
//!
//! Turns two corner cells into the set of every cell inside the
//! axis-aligned rectangle they span, inclusive on both ends.

use std::collections::HashSet;

use super::cell::CellId;

/// Inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRange {
    /// Bounding box of two corners, in any order
    pub fn between(anchor: CellId, current: CellId) -> Self {
        Self {
            top: anchor.row.min(current.row),
            left: anchor.column.min(current.column),
            bottom: anchor.row.max(current.row),
            right: anchor.column.max(current.column),
        }
    }

    /// Rows covered, saturating at `usize::MAX`
    pub fn row_count(&self) -> usize {
        (self.bottom - self.top).saturating_add(1)
    }

    /// Columns covered, saturating at `usize::MAX`
    pub fn column_count(&self) -> usize {
        (self.right - self.left).saturating_add(1)
    }

    /// Number of cells covered, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.row_count().saturating_mul(self.column_count())
    }

    /// A range always covers at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, cell: CellId) -> bool {
        (self.top..=self.bottom).contains(&cell.row)
            && (self.left..=self.right).contains(&cell.column)
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (self.top..=self.bottom)
            .flat_map(move |row| (self.left..=self.right).map(move |col| CellId::new(row, col)))
    }
}

/// Every cell in the rectangle between `anchor` and `current`
pub fn expand_range(anchor: CellId, current: CellId) -> HashSet<CellId> {
    CellRange::between(anchor, current).cells().collect()
}

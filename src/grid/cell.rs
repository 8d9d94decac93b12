//! Cell identity
//!
//! A `CellId` is the canonical (row, column) coordinate used as the unit of
//! selection, highlighting and search hits. Its string key (`cell-{row}-{column}`)
//! is what the rendering layer uses as a stable element id.

use std::fmt;

/// Canonical coordinate of a cell in the grid
///
/// Equality, hashing and ordering all follow the (row, column) pair, which is
/// the same relation as comparing keys since the key encoding is injective.
/// Ordering is row-major: row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellId {
    pub row: usize,
    pub column: usize,
}

impl CellId {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Stable string key for this cell
    pub fn key(&self) -> String {
        format!("cell-{}-{}", self.row, self.column)
    }

    /// Parse a key produced by [`CellId::key`]
    pub fn from_key(key: &str) -> Option<Self> {
        let rest = key.strip_prefix("cell-")?;
        let (row, column) = rest.split_once('-')?;
        Some(Self::new(row.parse().ok()?, column.parse().ok()?))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Compare two optional cells
///
/// Absent cells are never equal to anything, including another absent cell.
pub fn same_cell(a: Option<&CellId>, b: Option<&CellId>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

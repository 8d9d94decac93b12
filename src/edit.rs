//! Single-cell edit session
//!
//! A session is opened on one cell with a buffer seeded from the current
//! value. Committing writes the buffer back through
//! [`TableData::apply_cell_edit`] only when it differs from the original.

use crate::grid::{CellId, TableData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    cell: CellId,
    /// Header key of the edited column
    key: String,
    original: Option<String>,
    buffer: String,
}

impl EditSession {
    /// Open a session on `cell`; `None` if the cell lies outside the table
    pub fn begin<D: TableData + ?Sized>(data: &D, cell: CellId) -> Option<Self> {
        if cell.row >= data.row_count() {
            return None;
        }
        let key = data.headers().get(cell.column)?.clone();
        let original = data.value_at(cell.row, cell.column).map(str::to_string);

        Some(Self {
            cell,
            key,
            buffer: original.clone().unwrap_or_default(),
            original,
        })
    }

    pub fn cell(&self) -> CellId {
        self.cell
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, value: String) {
        self.buffer = value;
    }

    pub fn is_modified(&self) -> bool {
        self.original.as_deref() != Some(self.buffer.as_str())
    }

    /// Write the buffer back. Returns true if the table changed.
    pub fn commit<D: TableData + ?Sized>(self, data: &mut D) -> bool {
        if !self.is_modified() {
            return false;
        }
        let changed = data.apply_cell_edit(self.cell.row, &self.key, self.buffer);
        tracing::debug!(target: "edit", cell = %self.cell, key = %self.key, changed, "edit committed");
        changed
    }
}

//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::gesture::PointerInput;
use crate::grid::{CellId, Dataset};

/// Raw pointer reports from the table surface
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Button pressed over a cell
    Down(PointerInput),
    /// Pointer moved over a cell
    Move(PointerInput),
    /// Button released over a cell
    Up(CellId),
}

/// Search box and hit navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Replace the search term (`None` or empty clears the search)
    SetTerm(Option<String>),
    /// Step to the next hit, wrapping
    Next,
    /// Step to the previous hit, wrapping
    Prev,
}

/// Header interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortMsg {
    /// Header of the column with this key was clicked
    ColumnClicked(String),
}

/// Cell editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Open an edit buffer on a cell (double click)
    Begin(CellId),
    /// Replace the edit buffer contents
    SetBuffer(String),
    /// Write the buffer back to the table
    Commit,
    /// Discard the open session (blur, escape)
    Cancel,
    /// Write a value straight into one cell
    Apply {
        row: usize,
        column: usize,
        value: String,
    },
}

/// Dataset lifecycle and export
#[derive(Debug, Clone)]
pub enum DataMsg {
    /// Replace the table contents
    Load(Dataset),
    /// Serialize the committed selection for the clipboard
    CopySelection,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Pointer(PointerMsg),
    Search(SearchMsg),
    Sort(SortMsg),
    Edit(EditMsg),
    Data(DataMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn pointer_down(cell: CellId, x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Down(PointerInput::new(cell, x, y)))
    }

    pub fn pointer_move(cell: CellId, x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Move(PointerInput::new(cell, x, y)))
    }

    pub fn pointer_up(cell: CellId) -> Self {
        Msg::Pointer(PointerMsg::Up(cell))
    }

    pub fn search(term: impl Into<String>) -> Self {
        Msg::Search(SearchMsg::SetTerm(Some(term.into())))
    }

    pub fn sort_by(key: impl Into<String>) -> Self {
        Msg::Sort(SortMsg::ColumnClicked(key.into()))
    }
}

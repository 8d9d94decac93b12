//! Tri-state column sort
//!
//! Clicking a header cycles that column through ascending, descending and
//! unsorted. Clicking a different column always starts over at ascending.
//! The controller only tracks the state; the reorder itself is performed by
//! the table through [`TableData::apply_reorder`].

use serde::{Deserialize, Serialize};

use crate::grid::TableData;

/// Direction of an active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

/// Tri-state sort controller; `None` means unsorted
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: Option<SortState>,
}

impl SortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&SortState> {
        self.state.as_ref()
    }

    pub fn column(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.column.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.state.as_ref().map(|s| s.direction)
    }

    /// Direction for `key` if it is the sorted column
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.state
            .as_ref()
            .filter(|s| s.column == key)
            .map(|s| s.direction)
    }

    pub fn is_sorted(&self) -> bool {
        self.state.is_some()
    }

    /// Advance the sort state for a header click and return the new state
    pub fn column_clicked(&mut self, key: &str) -> Option<&SortState> {
        self.state = match self.state.take() {
            Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }) if column == key => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortState {
                column,
                direction: SortDirection::Descending,
            }) if column == key => None,
            _ => Some(SortState {
                column: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };

        tracing::debug!(target: "sort", state = ?self.state, "sort state changed");
        self.state.as_ref()
    }

    /// Ask the table to reflect the current state
    ///
    /// When unsorted, rows go back to load order if `restore_order` is set,
    /// otherwise the previous order is left in place.
    pub fn apply<D: TableData + ?Sized>(&self, data: &mut D, restore_order: bool) {
        match &self.state {
            Some(state) => data.apply_reorder(&state.column, state.direction.is_ascending()),
            None if restore_order => data.restore_load_order(),
            None => {}
        }
    }

    /// Back to unsorted without touching the table
    pub fn reset(&mut self) {
        self.state = None;
    }
}

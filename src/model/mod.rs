//! Table model - the complete state of the interaction engine
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! `TableModel` owns the dataset and every piece of derived interaction state;
//! it is only mutated through [`crate::update::update`].

pub mod observer;

pub use observer::{Change, Observers, SubscriptionId};

use crate::config::GridConfig;
use crate::edit::EditSession;
use crate::gesture::GestureTracker;
use crate::grid::{expand_range, CellId, Dataset, TableData};
use crate::search::SearchIndex;
use crate::selection::SelectionState;
use crate::sort::SortController;

/// The complete table model
#[derive(Debug)]
pub struct TableModel {
    /// Table contents (headers + rows in current display order)
    pub data: Dataset,
    /// Pointer gesture state machine
    pub gesture: GestureTracker,
    /// Primary, click and drag selections
    pub selection: SelectionState,
    /// Search term, hits and active hit
    pub search: SearchIndex,
    /// Tri-state column sort
    pub sort: SortController,
    /// Open single-cell edit, if any
    pub editing: Option<EditSession>,
    pub config: GridConfig,
    observers: Observers,
    /// Areas touched by the message being processed
    pending: Change,
}

impl TableModel {
    pub fn new(data: Dataset) -> Self {
        Self::with_config(data, GridConfig::default())
    }

    pub fn with_config(data: Dataset, config: GridConfig) -> Self {
        Self {
            data,
            gesture: GestureTracker::new(config.drag_threshold_px),
            selection: SelectionState::new(),
            search: SearchIndex::new(),
            sort: SortController::new(),
            editing: None,
            config,
            observers: Observers::default(),
            pending: Change::NONE,
        }
    }

    /// Register a callback invoked with the change set after each message
    pub fn subscribe(&mut self, callback: impl FnMut(&Change) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub(crate) fn notify(&mut self, change: Change) {
        self.observers.notify(change);
    }

    /// Record that an area changed while handling the current message
    pub(crate) fn touch(&mut self, change: Change) {
        self.pending.insert(change);
    }

    pub(crate) fn take_change(&mut self) -> Change {
        std::mem::take(&mut self.pending)
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.data.column_count()
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Whether `cell` lies inside the table
    pub fn contains(&self, cell: CellId) -> bool {
        cell.row < self.row_count() && cell.column < self.column_count()
    }

    /// Nearest cell inside the table, `None` when the table has no cells
    pub fn clamp_cell(&self, cell: CellId) -> Option<CellId> {
        let last_row = self.row_count().checked_sub(1)?;
        let last_column = self.column_count().checked_sub(1)?;
        Some(CellId::new(cell.row.min(last_row), cell.column.min(last_column)))
    }

    /// Current value of `cell`
    pub fn value(&self, cell: CellId) -> Option<&str> {
        self.data.value_at(cell.row, cell.column)
    }

    /// Drop all interaction state tied to row positions
    ///
    /// The search term survives; its hits are rebuilt on the next refresh.
    pub(crate) fn reset_interaction(&mut self) {
        self.gesture.reset();
        self.selection.clear();
        self.sort.reset();
        self.editing = None;
        self.search.reset_cursor();
        self.search.mark_dirty();
    }

    /// Verify the cross-component invariants
    pub fn check_invariants(&self) -> Result<(), String> {
        let selected = self.selection.click_selection();
        if selected.len() == 1 && self.selection.primary() != selected.iter().next().copied() {
            return Err(format!(
                "single selected cell {:?} differs from primary {:?}",
                selected, self.selection.primary()
            ));
        }

        let outside = self
            .selection
            .primary()
            .into_iter()
            .chain(selected.iter().copied())
            .chain(self.selection.drag_selection().iter().copied())
            .find(|cell| !self.contains(*cell));
        if let Some(cell) = outside {
            return Err(format!("selected cell {} outside table", cell));
        }

        if let Some(active) = self.search.active_index() {
            if active >= self.search.hit_count() {
                return Err(format!(
                    "active hit {} out of range ({} hits)",
                    active,
                    self.search.hit_count()
                ));
            }
        }

        if self.gesture.is_dragging() {
            if !selected.is_empty() {
                return Err("click selection not cleared during drag".to_string());
            }
            if let (Some(anchor), Some(current)) = (self.gesture.anchor(), self.gesture.drag_current()) {
                if *self.selection.drag_selection() != expand_range(anchor, current) {
                    return Err(format!(
                        "drag selection is not the rectangle {} to {}",
                        anchor, current
                    ));
                }
            }
        }

        if let Some(session) = &self.editing {
            if !self.contains(session.cell()) {
                return Err(format!("edit session on {} outside table", session.cell()));
            }
        }

        Ok(())
    }
}

//! Selection engine
//!
//! Derives the selected cells from gesture events. Rendering code only reads
//! this state; every mutation goes through [`SelectionState::apply`].

use std::collections::HashSet;

use crate::gesture::GestureEvent;
use crate::grid::{expand_range, CellId};

/// Selected, drag-selected and hovered cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// The cell a click or drag started from
    primary: Option<CellId>,
    /// Committed selection (single click or finished drag)
    click_selection: HashSet<CellId>,
    /// Live rectangle while a drag is open
    drag_selection: HashSet<CellId>,
    /// Cell currently under the pointer during a drag
    hovered_drag_cell: Option<CellId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Option<CellId> {
        self.primary
    }

    pub fn click_selection(&self) -> &HashSet<CellId> {
        &self.click_selection
    }

    pub fn drag_selection(&self) -> &HashSet<CellId> {
        &self.drag_selection
    }

    pub fn hovered_drag_cell(&self) -> Option<CellId> {
        self.hovered_drag_cell
    }

    /// Whether a cell is the primary cell or part of the committed selection
    pub fn is_selected(&self, cell: CellId) -> bool {
        self.primary == Some(cell) || self.click_selection.contains(&cell)
    }

    pub fn is_drag_target(&self, cell: CellId) -> bool {
        self.drag_selection.contains(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.click_selection.is_empty()
            && self.drag_selection.is_empty()
            && self.hovered_drag_cell.is_none()
    }

    /// Committed selection in ascending row, then column order
    pub fn selected_cells(&self) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self.click_selection.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Apply one gesture event. Returns true if anything changed.
    pub fn apply(&mut self, event: &GestureEvent) -> bool {
        let changed = match *event {
            GestureEvent::Click(cell) => self.click(cell),
            GestureEvent::DragStart(anchor) => self.start_drag(anchor),
            GestureEvent::DragUpdate(current) => self.update_drag(current),
            GestureEvent::DragEnd(_) => self.end_drag(),
            GestureEvent::DragCancel => {
                let changed = !self.is_empty();
                self.clear();
                changed
            }
        };

        if changed {
            tracing::trace!(
                target: "selection",
                ?event,
                primary = ?self.primary,
                selected = self.click_selection.len(),
                dragged = self.drag_selection.len(),
                "selection updated"
            );
        }
        changed
    }

    /// Apply a batch of events in order. Returns true if anything changed.
    pub fn apply_all(&mut self, events: &[GestureEvent]) -> bool {
        events
            .iter()
            .fold(false, |changed, event| self.apply(event) | changed)
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// A click always changes the selection
    fn click(&mut self, cell: CellId) -> bool {
        if self.click_selection.len() <= 1 && self.primary == Some(cell) {
            self.primary = None;
            self.click_selection.clear();
        } else {
            self.primary = Some(cell);
            self.click_selection.clear();
            self.click_selection.insert(cell);
        }
        true
    }

    fn start_drag(&mut self, anchor: CellId) -> bool {
        let unchanged = self.primary == Some(anchor)
            && self.click_selection.is_empty()
            && self.hovered_drag_cell.is_none()
            && self.drag_selection.len() == 1
            && self.drag_selection.contains(&anchor);
        if unchanged {
            return false;
        }

        self.primary = Some(anchor);
        self.click_selection.clear();
        self.drag_selection.clear();
        self.drag_selection.insert(anchor);
        self.hovered_drag_cell = None;
        true
    }

    fn update_drag(&mut self, current: CellId) -> bool {
        let mut changed = self.hovered_drag_cell.replace(current) != Some(current);
        if let Some(primary) = self.primary {
            let rectangle = expand_range(primary, current);
            if rectangle != self.drag_selection {
                self.drag_selection = rectangle;
                changed = true;
            }
        }
        changed
    }

    fn end_drag(&mut self) -> bool {
        let committed = std::mem::take(&mut self.drag_selection);
        // A one-cell drag behaves like a click on that cell
        let primary = match committed.len() {
            1 => committed.iter().next().copied(),
            _ => None,
        };

        let changed = self.hovered_drag_cell.take().is_some()
            || self.primary != primary
            || self.click_selection != committed;
        self.primary = primary;
        self.click_selection = committed;
        changed
    }
}

//! View model - what the rendering layer reads from the table model
//!
//! Nothing here mutates state. Renderers ask for per-cell classification,
//! header chevrons and footer statistics, and draw them however they like.

pub mod format;

pub use format::{column_title, format_number, pluralise, search_summary, totals_summary};

use std::ops::Range;

use serde::Serialize;

use crate::grid::{CellId, TableData};
use crate::model::TableModel;
use crate::sort::SortDirection;

/// Visual classification of a cell, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    SearchActiveHit,
    PrimaryOrSelected,
    DragTarget,
    DragHovered,
    None,
}

/// Classify a cell; the first matching class wins
pub fn classify(model: &TableModel, cell: CellId) -> CellClass {
    if model.search.is_active_hit(cell) {
        CellClass::SearchActiveHit
    } else if model.selection.is_selected(cell) {
        CellClass::PrimaryOrSelected
    } else if model.selection.is_drag_target(cell) {
        CellClass::DragTarget
    } else if model.selection.hovered_drag_cell() == Some(cell) {
        CellClass::DragHovered
    } else {
        CellClass::None
    }
}

/// Everything needed to draw one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Stable element key (`cell-{row}-{column}`)
    pub key: String,
    /// Displayed value; the edit buffer while the cell is being edited
    pub value: String,
    pub class: CellClass,
    /// Byte ranges of `value` matching the search term
    pub highlights: Vec<Range<usize>>,
    pub editing: bool,
}

pub fn cell_view(model: &TableModel, cell: CellId) -> CellView {
    let session = model.editing.as_ref().filter(|s| s.cell() == cell);
    let value = match session {
        Some(session) => session.buffer().to_string(),
        None => model.value(cell).unwrap_or_default().to_string(),
    };
    let highlights = model.search.highlights(&value);

    CellView {
        key: cell.key(),
        class: classify(model, cell),
        highlights,
        editing: session.is_some(),
        value,
    }
}

/// Sort indicator shown next to a header title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chevron {
    Up,
    Down,
}

impl From<SortDirection> for Chevron {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Chevron::Up,
            SortDirection::Descending => Chevron::Down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub key: String,
    pub title: String,
    pub chevron: Option<Chevron>,
}

pub fn header_view(model: &TableModel) -> Vec<HeaderView> {
    model
        .data
        .headers()
        .iter()
        .map(|key| HeaderView {
            key: key.clone(),
            title: column_title(key),
            chevron: model.sort.direction_for(key).map(Chevron::from),
        })
        .collect()
}

/// Aggregate numbers shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterStats {
    pub rows: usize,
    pub columns: usize,
    pub cells: usize,
    pub term: Option<String>,
    pub hits: usize,
    pub row_hits: usize,
    /// 1-based position of the active hit
    pub active_position: Option<usize>,
    pub has_next: bool,
    pub has_prev: bool,
    pub selected: usize,
    pub sort_column: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl FooterStats {
    pub fn from_model(model: &TableModel) -> Self {
        Self {
            rows: model.row_count(),
            columns: model.column_count(),
            cells: model.cell_count(),
            term: model.search.term().map(str::to_string),
            hits: model.search.hit_count(),
            row_hits: model.search.row_hit_count(),
            active_position: model.search.active_position(),
            has_next: model.search.has_next(),
            has_prev: model.search.has_prev(),
            selected: model.selection.click_selection().len(),
            sort_column: model.sort.column().map(str::to_string),
            sort_direction: model.sort.direction(),
        }
    }

    /// Search line, present only while a term is set
    pub fn search_line(&self) -> Option<String> {
        self.term
            .as_ref()
            .map(|_| search_summary(self.active_position, self.hits, self.row_hits))
    }

    pub fn totals_line(&self) -> String {
        totals_summary(self.columns, self.rows)
    }
}

/// Committed selection as comma-joined values in row, then column order
///
/// Missing values contribute an empty field. `None` when nothing is selected.
pub fn copy_selection_text(model: &TableModel) -> Option<String> {
    let cells = model.selection.selected_cells();
    if cells.is_empty() {
        return None;
    }
    let values: Vec<&str> = cells
        .iter()
        .map(|cell| model.value(*cell).unwrap_or_default())
        .collect();
    Some(values.join(","))
}

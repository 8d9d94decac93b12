//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! gesture, selection, search and sort transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gesture=trace,selection=trace` - scoped filtering
//! - `RUST_LOG=gridlens::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridlens/logs/gridlens.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::gesture::GesturePhase;
use crate::grid::CellId;
use crate::model::TableModel;
use crate::sort::SortState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/gridlens/logs/gridlens.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for rendered tables
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of interaction state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub phase: GesturePhase,
    pub primary: Option<CellId>,
    pub selected: usize,
    pub dragged: usize,
    pub term: Option<String>,
    pub hits: usize,
    pub active: Option<usize>,
    pub sort: Option<SortState>,
    pub editing: Option<CellId>,
    pub rows: usize,
}

impl StateSnapshot {
    pub fn capture(model: &TableModel) -> Self {
        Self {
            phase: model.gesture.phase(),
            primary: model.selection.primary(),
            selected: model.selection.click_selection().len(),
            dragged: model.selection.drag_selection().len(),
            term: model.search.term().map(str::to_string),
            hits: model.search.hit_count(),
            active: model.search.active_index(),
            sort: model.sort.state().cloned(),
            editing: model.editing.as_ref().map(|e| e.cell()),
            rows: model.row_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.phase != other.phase {
            changes.push(format!("gesture: {:?} → {:?}", self.phase, other.phase));
        }
        if self.primary != other.primary {
            changes.push(format!(
                "primary: {} → {}",
                fmt_cell(self.primary),
                fmt_cell(other.primary)
            ));
        }
        if self.selected != other.selected {
            changes.push(format!("selected: {} → {}", self.selected, other.selected));
        }
        if self.dragged != other.dragged {
            changes.push(format!("dragged: {} → {}", self.dragged, other.dragged));
        }
        if self.term != other.term {
            changes.push(format!("term: {:?} → {:?}", self.term, other.term));
        }
        if self.hits != other.hits || self.active != other.active {
            changes.push(format!(
                "hits: {}@{:?} → {}@{:?}",
                self.hits, self.active, other.hits, other.active
            ));
        }
        if self.sort != other.sort {
            changes.push(format!(
                "sort: {} → {}",
                fmt_sort(self.sort.as_ref()),
                fmt_sort(other.sort.as_ref())
            ));
        }
        if self.editing != other.editing {
            changes.push(format!(
                "editing: {} → {}",
                fmt_cell(self.editing),
                fmt_cell(other.editing)
            ));
        }
        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn fmt_cell(cell: Option<CellId>) -> String {
    cell.map_or_else(|| "none".to_string(), |c| c.to_string())
}

fn fmt_sort(sort: Option<&SortState>) -> String {
    sort.map_or_else(
        || "unsorted".to_string(),
        |s| format!("{} {}", s.column, s.direction),
    )
}

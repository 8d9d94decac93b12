//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. After the
//! per-area handler runs, `update` refreshes the search index, works out the
//! scroll requests and notifies observers, so callers always see a settled
//! model when it returns.

mod data;
mod edit;
mod pointer;
mod search;
mod sort;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{Change, TableModel};
use crate::tracing::StateSnapshot;

pub use data::update_data;
pub use edit::update_edit;
pub use pointer::update_pointer;
pub use search::update_search;
pub use sort::update_sort;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut TableModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = StateSnapshot::capture(model);
    let active_before = model.search.active_hit();

    let result = match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::Sort(m) => sort::update_sort(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Data(m) => data::update_data(model, m),
    };

    let mut cmds = vec![result.unwrap_or_default()];

    if model.search.refresh(&model.data) {
        model.touch(Change::SEARCH);
    }

    let change = model.take_change();
    let active_after = model.search.active_hit();

    if change.contains(Change::SORT) {
        cmds.push(Cmd::ScrollToRow(0));
        if let Some(hit) = active_after {
            cmds.push(Cmd::ScrollToRow(hit.row));
        }
    } else if active_after != active_before {
        if let Some(hit) = active_after {
            cmds.push(Cmd::ScrollToRow(hit.row));
        }
    }

    if !change.is_empty() {
        cmds.push(Cmd::Redraw);
    }

    let after = StateSnapshot::capture(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, %change, "state changed");
    }

    #[cfg(debug_assertions)]
    {
        if let Err(violation) = model.check_invariants() {
            tracing::error!(msg = %msg_name, %violation, "invariant violated");
            panic!("invariant violated after {}: {}", msg_name, violation);
        }
    }

    model.notify(change);

    match Cmd::batch(cmds) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Pointer::Up(CellId { row: 1, column: 1 })`
/// - `Sort::ColumnClicked("age")`
/// - `Data::Load(..)`
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::DataMsg;

    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Sort(m) => format!("Sort::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        // Dataset payloads are too large to log
        Msg::Data(DataMsg::Load(_)) => "Data::Load(..)".to_string(),
        Msg::Data(m) => format!("Data::{:?}", m),
    }
}

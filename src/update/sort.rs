//! Sort message handlers

use crate::commands::Cmd;
use crate::grid::TableData;
use crate::messages::SortMsg;
use crate::model::{Change, TableModel};

/// Cycle the sort on a header click and reorder the table
pub fn update_sort(model: &mut TableModel, msg: SortMsg) -> Option<Cmd> {
    match msg {
        SortMsg::ColumnClicked(key) => {
            if !model.data.headers().iter().any(|h| *h == key) {
                tracing::warn!(target: "sort", %key, "ignoring click on unknown column");
                return None;
            }

            model.sort.column_clicked(&key);
            model
                .sort
                .apply(&mut model.data, model.config.restore_order_on_unsort);

            // Row positions moved: hits and any open edit refer to stale rows
            model.search.reset_cursor();
            model.search.mark_dirty();
            if model.editing.take().is_some() {
                tracing::debug!(target: "edit", "edit cancelled by sort");
                model.touch(Change::EDIT);
            }

            model.touch(Change::SORT);
            None
        }
    }
}

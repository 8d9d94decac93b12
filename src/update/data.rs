//! Dataset message handlers

use crate::commands::Cmd;
use crate::grid::TableData;
use crate::messages::DataMsg;
use crate::model::{Change, TableModel};
use crate::view::copy_selection_text;

/// Replace the table or export the selection
pub fn update_data(model: &mut TableModel, msg: DataMsg) -> Option<Cmd> {
    match msg {
        DataMsg::Load(data) => {
            tracing::info!(
                target: "data",
                rows = data.row_count(),
                columns = data.column_count(),
                "dataset loaded"
            );
            let was_sorted = model.sort.is_sorted();
            model.data = data;
            model.reset_interaction();

            let mut change = Change::DATA | Change::SELECTION | Change::EDIT;
            change.set(Change::SORT, was_sorted);
            model.touch(change);

            // Clearing a sort already scrolls to the top
            (!was_sorted).then_some(Cmd::ScrollToRow(0))
        }

        DataMsg::CopySelection => {
            let text = copy_selection_text(model)?;
            tracing::debug!(target: "data", bytes = text.len(), "copying selection");
            Some(Cmd::CopyToClipboard(text))
        }
    }
}

//! Cell edit message handlers

use crate::commands::Cmd;
use crate::edit::EditSession;
use crate::grid::TableData;
use crate::messages::EditMsg;
use crate::model::{Change, TableModel};

/// Handle the edit session lifecycle and direct cell writes
pub fn update_edit(model: &mut TableModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Begin(cell) => match EditSession::begin(&model.data, cell) {
            Some(session) => {
                tracing::debug!(target: "edit", %cell, "edit started");
                model.editing = Some(session);
                model.touch(Change::EDIT);
            }
            None => tracing::warn!(target: "edit", %cell, "cannot edit cell outside table"),
        },

        EditMsg::SetBuffer(value) => {
            if let Some(session) = model.editing.as_mut() {
                session.set_buffer(value);
                model.touch(Change::EDIT);
            }
        }

        EditMsg::Commit => {
            if let Some(session) = model.editing.take() {
                model.touch(Change::EDIT);
                if session.commit(&mut model.data) {
                    model.search.mark_dirty();
                    model.touch(Change::DATA);
                }
            }
        }

        EditMsg::Cancel => {
            if model.editing.take().is_some() {
                tracing::debug!(target: "edit", "edit cancelled");
                model.touch(Change::EDIT);
            }
        }

        EditMsg::Apply { row, column, value } => {
            let Some(key) = model.data.headers().get(column).cloned() else {
                tracing::warn!(target: "edit", row, column, "ignoring edit of unknown column");
                return None;
            };
            if model.data.apply_cell_edit(row, &key, value) {
                tracing::debug!(target: "edit", row, %key, "cell updated");
                model.search.mark_dirty();
                model.touch(Change::DATA);
            }
        }
    }

    None
}

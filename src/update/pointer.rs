//! Pointer message handlers

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::{Change, TableModel};

/// Feed a pointer report through the gesture tracker into the selection
///
/// A press outside the table is ignored. Moves and releases outside it are
/// clamped to the nearest edge cell so an open drag can still finish.
pub fn update_pointer(model: &mut TableModel, msg: PointerMsg) -> Option<Cmd> {
    let events = match msg {
        PointerMsg::Down(input) => {
            if !model.contains(input.cell) {
                tracing::debug!(target: "gesture", cell = %input.cell, "press outside table ignored");
                return None;
            }
            model.gesture.pointer_down(input)
        }
        PointerMsg::Move(mut input) => {
            input.cell = model.clamp_cell(input.cell)?;
            model.gesture.pointer_move(input)
        }
        PointerMsg::Up(cell) => {
            let cell = model.clamp_cell(cell)?;
            model.gesture.pointer_up(cell)
        }
    };

    if model.selection.apply_all(&events) {
        model.touch(Change::SELECTION);
    }
    None
}

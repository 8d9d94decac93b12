//! Search message handlers

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::{Change, TableModel};

/// Handle search term changes and hit navigation
///
/// Term changes only mark the index dirty; the rescan happens once at the
/// end of `update`.
pub fn update_search(model: &mut TableModel, msg: SearchMsg) -> Option<Cmd> {
    let changed = match msg {
        SearchMsg::SetTerm(term) => model.search.set_term(term),
        SearchMsg::Next => model.search.next(),
        SearchMsg::Prev => model.search.prev(),
    };

    if changed {
        model.touch(Change::SEARCH);
    }
    None
}

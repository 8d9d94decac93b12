//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridlens::commands::Cmd;
use gridlens::grid::{CellId, Dataset, TableData};
use gridlens::messages::{Msg, PointerMsg};
use gridlens::model::TableModel;
use gridlens::update::update;

/// Build a dataset with headers `c0..cN` from string rows
pub fn grid(rows: &[&[&str]]) -> Dataset {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let headers = (0..width).map(|i| format!("c{}", i)).collect();
    let rows = rows
        .iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect();
    Dataset::from_strings(headers, rows)
}

/// Build a dataset with named headers
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::from_strings(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    )
}

/// A `rows` x `columns` grid whose cells read `r{row}c{column}`
pub fn numbered_grid(rows: usize, columns: usize) -> Dataset {
    Dataset::from_strings(
        (0..columns).map(|c| format!("c{}", c)).collect(),
        (0..rows)
            .map(|r| (0..columns).map(|c| format!("r{}c{}", r, c)).collect())
            .collect(),
    )
}

/// The canonical people table used by sort and search scenarios
pub fn people() -> Dataset {
    table(
        &["name", "age", "home_town"],
        &[
            &["carol", "31", "Oslo"],
            &["alice", "25", "Bergen"],
            &["bob", "31", "oslo"],
            &["dave", "19", "Tromsø"],
        ],
    )
}

pub fn test_model(data: Dataset) -> TableModel {
    TableModel::new(data)
}

pub fn cell(row: usize, column: usize) -> CellId {
    CellId::new(row, column)
}

/// Send several messages, collecting the commands they produced
pub fn send_all(model: &mut TableModel, msgs: Vec<Msg>) -> Vec<Cmd> {
    msgs.into_iter()
        .filter_map(|msg| update(model, msg))
        .collect()
}

/// Press and release on a cell without moving
pub fn click(model: &mut TableModel, target: CellId) {
    let (x, y) = screen(target);
    update(model, Msg::pointer_down(target, x, y));
    update(model, Msg::pointer_up(target));
}

/// Press on `from`, move to `to`, release on `to`
pub fn drag(model: &mut TableModel, from: CellId, to: CellId) {
    let (x0, y0) = screen(from);
    let (x1, y1) = screen(to);
    update(model, Msg::pointer_down(from, x0, y0));
    update(model, Msg::pointer_move(to, x1, y1));
    update(model, Msg::Pointer(PointerMsg::Up(to)));
}

/// Nominal screen position of a cell (100px columns, 20px rows)
pub fn screen(target: CellId) -> (f64, f64) {
    (
        target.column as f64 * 100.0 + 50.0,
        target.row as f64 * 20.0 + 10.0,
    )
}

/// Column values in display order
pub fn column(model: &TableModel, key: &str) -> Vec<String> {
    (0..model.data.row_count())
        .map(|r| model.data.value(r, key).unwrap_or_default().to_string())
        .collect()
}

/// Rows requested by `ScrollToRow` in a command, in order
pub fn scrolls(cmd: &Option<Cmd>) -> Vec<usize> {
    cmd.as_ref().map(Cmd::scroll_targets).unwrap_or_default()
}

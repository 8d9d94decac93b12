//! gridlens - interactive table engine
//!
//! This crate provides the state-coordination core for an interactive data
//! table (pointer gestures, rectangular selection, search with cyclic
//! navigation, tri-state sort, cell editing) implementing the Elm
//! Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod edit;
pub mod gesture;
pub mod grid;
pub mod messages;
pub mod model;
pub mod search;
pub mod selection;
pub mod sort;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use grid::{CellId, Dataset, TableData};
pub use messages::Msg;
pub use model::TableModel;
pub use update::update;

//! Table grid primitives
//!
//! Provides the building blocks shared by the interaction engine:
//! - Cell identities and rectangular ranges
//! - The in-memory dataset and its read/write interface
//! - CSV loading
//! - The row viewport used to honour scroll requests
//!
//! # Architecture
//!
//! ```text
//! TableModel
//! ├── Dataset (rows + headers, owned data layer)
//! ├── GestureTracker ──events──▶ SelectionState
//! ├── SearchIndex (hits over Dataset)
//! └── SortController ──reorder──▶ Dataset
//! ```

mod cell;
mod dataset;
mod parser;
mod range;
mod viewport;

pub use cell::{same_cell, CellId};
pub use dataset::{compare_values, Dataset, TableData};
pub use parser::{detect_delimiter, load_csv, parse_csv, parse_reader, Delimiter, ParseError};
pub use range::{expand_range, CellRange};
pub use viewport::TableViewport;

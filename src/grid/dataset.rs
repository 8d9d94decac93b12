//! Tabular data model
//!
//! Rows are stored positionally (one `Option<String>` per header slot) together
//! with the index they had when the data was loaded, so any sort can be undone
//! without keeping a second copy of the table.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Read/write access to a table, as required by the search index and sort controller
///
/// Every method is total: out-of-range rows, unknown keys and missing cells
/// are answered with `None` or ignored rather than panicking.
pub trait TableData {
    /// Ordered header keys
    fn headers(&self) -> &[String];

    /// Number of data rows (the header is not a row)
    fn row_count(&self) -> usize;

    /// Value of the cell at (row, header position), `None` if absent
    fn value_at(&self, row: usize, column: usize) -> Option<&str>;

    /// Replace a single cell value. Returns true if the table changed.
    fn apply_cell_edit(&mut self, row: usize, key: &str, value: String) -> bool;

    /// Stable reorder of all rows by the string value under `key`
    ///
    /// Missing values sort lowest. Rows comparing equal keep their prior
    /// relative order in both directions.
    fn apply_reorder(&mut self, key: &str, ascending: bool);

    /// Put rows back into the order they were loaded in
    fn restore_load_order(&mut self);

    fn column_count(&self) -> usize {
        self.headers().len()
    }

    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    cells: Vec<Option<String>>,
    origin: usize,
}

impl Row {
    fn get(&self, slot: usize) -> Option<&str> {
        self.cells.get(slot).and_then(|c| c.as_deref())
    }
}

/// In-memory table: ordered headers plus ordered rows
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    /// For each header position, the storage slot its key resolves to.
    /// Duplicate keys resolve to their last occurrence.
    slots: Vec<usize>,
    by_key: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from headers and positional rows
    ///
    /// Rows shorter than the header list have missing trailing cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let mut by_key = HashMap::with_capacity(headers.len());
        for (pos, key) in headers.iter().enumerate() {
            by_key.insert(key.clone(), pos);
        }
        let slots = headers.iter().map(|key| by_key[key]).collect();

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(origin, cells)| Row { cells, origin })
            .collect();

        Self {
            headers,
            slots,
            by_key,
            rows,
        }
    }

    /// Create a dataset where every provided cell is present
    pub fn from_strings(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Self::new(headers, rows)
    }

    /// Create a dataset from keyed rows (header key -> value)
    pub fn from_maps<I>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = HashMap<String, String>>,
    {
        let rows = rows
            .into_iter()
            .map(|mut map| headers.iter().map(|key| map.remove(key)).collect())
            .collect();
        Self::new(headers, rows)
    }

    /// Header position of `key`, resolving duplicates to the last occurrence
    pub fn column_of(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// Value under `key` in `row`
    pub fn value(&self, row: usize, key: &str) -> Option<&str> {
        let slot = self.column_of(key)?;
        self.rows.get(row)?.get(slot)
    }

    /// Original load index of the row currently at `row`
    pub fn load_index(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|r| r.origin)
    }

    /// Iterate values of one row in header order
    pub fn row_values(&self, row: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.headers.len()).map(move |col| self.value_at(row, col))
    }
}

impl TableData for Dataset {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value_at(&self, row: usize, column: usize) -> Option<&str> {
        let slot = *self.slots.get(column)?;
        self.rows.get(row)?.get(slot)
    }

    fn apply_cell_edit(&mut self, row: usize, key: &str, value: String) -> bool {
        let Some(slot) = self.column_of(key) else {
            return false;
        };
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };

        if target.cells.len() <= slot {
            target.cells.resize(slot + 1, None);
        }
        if target.cells[slot].as_deref() == Some(value.as_str()) {
            return false;
        }
        target.cells[slot] = Some(value);
        true
    }

    fn apply_reorder(&mut self, key: &str, ascending: bool) {
        let Some(slot) = self.column_of(key) else {
            return;
        };
        // Vec::sort_by is stable, ties keep their current relative order
        self.rows.sort_by(|a, b| {
            let ord = compare_values(a.get(slot), b.get(slot));
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    fn restore_load_order(&mut self) {
        self.rows.sort_by_key(|row| row.origin);
    }
}

/// Sort comparison for cell values, missing values lowest
pub fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Dataset {
        Dataset::from_strings(
            vec!["name".into(), "age".into()],
            vec![
                vec!["carol".into(), "31".into()],
                vec!["alice".into(), "25".into()],
                vec!["bob".into(), "31".into()],
            ],
        )
    }

    #[test]
    fn test_value_lookup() {
        let data = people();
        assert_eq!(data.row_count(), 3);
        assert_eq!(data.column_count(), 2);
        assert_eq!(data.value(1, "name"), Some("alice"));
        assert_eq!(data.value_at(2, 1), Some("31"));
        assert_eq!(data.value(0, "missing"), None);
        assert_eq!(data.value_at(7, 0), None);
        assert_eq!(data.value_at(0, 9), None);
    }

    #[test]
    fn test_short_rows_have_missing_cells() {
        let data = Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![Some("1".into())]],
        );
        assert_eq!(data.value(0, "a"), Some("1"));
        assert_eq!(data.value(0, "b"), None);
    }

    #[test]
    fn test_duplicate_header_last_write_wins() {
        let data = Dataset::from_strings(
            vec!["k".into(), "k".into()],
            vec![vec!["first".into(), "second".into()]],
        );
        assert_eq!(data.value(0, "k"), Some("second"));
        assert_eq!(data.value_at(0, 0), Some("second"));
        assert_eq!(data.value_at(0, 1), Some("second"));
    }

    #[test]
    fn test_from_maps() {
        let mut row = HashMap::new();
        row.insert("b".to_string(), "x".to_string());
        let data = Dataset::from_maps(vec!["a".into(), "b".into()], vec![row]);
        assert_eq!(data.value(0, "a"), None);
        assert_eq!(data.value(0, "b"), Some("x"));
    }

    #[test]
    fn test_apply_cell_edit() {
        let mut data = people();
        assert!(data.apply_cell_edit(0, "name", "dave".into()));
        assert_eq!(data.value(0, "name"), Some("dave"));
        // Same value is not a change
        assert!(!data.apply_cell_edit(0, "name", "dave".into()));
        assert!(!data.apply_cell_edit(9, "name", "x".into()));
        assert!(!data.apply_cell_edit(0, "nope", "x".into()));
    }

    #[test]
    fn test_edit_fills_missing_cell() {
        let mut data = Dataset::new(vec!["a".into(), "b".into()], vec![vec![]]);
        assert!(data.apply_cell_edit(0, "b", "set".into()));
        assert_eq!(data.value(0, "a"), None);
        assert_eq!(data.value(0, "b"), Some("set"));
    }

    #[test]
    fn test_reorder_is_stable_both_directions() {
        let mut data = people();
        data.apply_reorder("age", true);
        let names: Vec<_> = (0..3).map(|r| data.value(r, "name").unwrap()).collect();
        assert_eq!(names, vec!["alice", "carol", "bob"]);

        data.apply_reorder("age", false);
        let names: Vec<_> = (0..3).map(|r| data.value(r, "name").unwrap()).collect();
        // carol and bob tie on 31 and keep their prior order
        assert_eq!(names, vec!["carol", "bob", "alice"]);
    }

    #[test]
    fn test_missing_values_sort_lowest() {
        let mut data = Dataset::new(
            vec!["v".into()],
            vec![vec![Some("b".into())], vec![None], vec![Some("a".into())]],
        );
        data.apply_reorder("v", true);
        assert_eq!(data.value(0, "v"), None);
        assert_eq!(data.value(1, "v"), Some("a"));
        data.apply_reorder("v", false);
        assert_eq!(data.value(2, "v"), None);
    }

    #[test]
    fn test_restore_load_order() {
        let mut data = people();
        data.apply_reorder("name", true);
        assert_eq!(data.value(0, "name"), Some("alice"));
        assert_eq!(data.load_index(0), Some(1));

        data.restore_load_order();
        assert_eq!(data.value(0, "name"), Some("carol"));
        assert_eq!(data.load_index(2), Some(2));
    }

    #[test]
    fn test_reorder_unknown_key_is_noop() {
        let mut data = people();
        data.apply_reorder("missing", true);
        assert_eq!(data.value(0, "name"), Some("carol"));
    }

    #[test]
    fn test_empty_dataset() {
        let mut data = Dataset::default();
        assert!(data.is_empty());
        assert_eq!(data.column_count(), 0);
        data.apply_reorder("x", true);
        data.restore_load_order();
        assert_eq!(data.row_values(0).count(), 0);
    }
}

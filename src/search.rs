//! Search index over table cells
//!
//! Holds the search term, the ordered hit list and the active-hit cursor.
//! The hit list is rebuilt from scratch whenever the term or the table
//! changes; callers mark the index dirty and [`SearchIndex::refresh`] does
//! the scan.

use std::collections::HashSet;
use std::ops::Range;

use crate::grid::{CellId, TableData};

/// Case-insensitive substring matcher for one search term
#[derive(Debug, Clone)]
struct Matcher {
    ascii: bool,
    /// Term as bytes when ASCII, compared with `eq_ignore_ascii_case`
    raw: String,
    /// Term lowered char by char for the Unicode path
    lowered: Vec<char>,
}

impl Matcher {
    fn new(term: &str) -> Self {
        Self {
            ascii: term.is_ascii(),
            raw: term.to_string(),
            lowered: lower_chars(term),
        }
    }

    fn is_match(&self, value: &str) -> bool {
        if self.ascii && value.is_ascii() {
            let needle = self.raw.as_bytes();
            value
                .as_bytes()
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle))
        } else {
            let lowered = lowered_with_spans(value);
            lowered
                .windows(self.lowered.len())
                .any(|window| window.iter().map(|(ch, _)| *ch).eq(self.lowered.iter().copied()))
        }
    }
}

/// `text` lowered one char at a time
fn lower_chars(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Lowered chars of `value`, each paired with the byte span of its source char
///
/// A char whose lowercase form is several chars contributes one entry per
/// lowered char, all sharing the same span.
fn lowered_with_spans(value: &str) -> Vec<(char, Range<usize>)> {
    value
        .char_indices()
        .flat_map(|(start, ch)| {
            let end = start + ch.len_utf8();
            ch.to_lowercase().map(move |lower| (lower, start..end))
        })
        .collect()
}

/// Search term, hits and active-hit cursor
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    term: Option<String>,
    /// Matching cells in row-major, then header order
    hits: Vec<CellId>,
    /// Distinct rows among `hits`
    row_hit_count: usize,
    /// Index into `hits`; always `< hits.len()` when set
    active: Option<usize>,
    dirty: bool,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn hits(&self) -> &[CellId] {
        &self.hits
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn row_hit_count(&self) -> usize {
        self.row_hit_count
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// 1-based position of the active hit, for display
    pub fn active_position(&self) -> Option<usize> {
        self.active.map(|i| i + 1)
    }

    pub fn active_hit(&self) -> Option<CellId> {
        self.active.and_then(|i| self.hits.get(i).copied())
    }

    pub fn is_active_hit(&self, cell: CellId) -> bool {
        self.active_hit() == Some(cell)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the search term. Empty terms are stored as no term.
    ///
    /// Returns true if the term changed (the index is then dirty).
    pub fn set_term(&mut self, term: Option<String>) -> bool {
        let term = term.filter(|t| !t.is_empty());
        if term == self.term {
            return false;
        }
        tracing::debug!(target: "search", ?term, "search term changed");
        self.term = term;
        self.dirty = true;
        true
    }

    /// Flag the index for a rescan (table contents changed)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Forget the active hit; the next recompute reselects the first hit
    pub fn reset_cursor(&mut self) {
        self.active = None;
    }

    /// Rescan if dirty. Returns true if a rescan ran.
    pub fn refresh<D: TableData + ?Sized>(&mut self, data: &D) -> bool {
        if !self.dirty {
            return false;
        }
        self.recompute(data);
        true
    }

    /// Rebuild the hit list from scratch
    pub fn recompute<D: TableData + ?Sized>(&mut self, data: &D) {
        self.dirty = false;
        self.hits.clear();
        self.row_hit_count = 0;

        if let Some(term) = self.term.as_deref() {
            let matcher = Matcher::new(term);
            let columns = data.column_count();
            for row in 0..data.row_count() {
                let before = self.hits.len();
                for column in 0..columns {
                    let Some(value) = data.value_at(row, column) else {
                        continue;
                    };
                    if matcher.is_match(value) {
                        self.hits.push(CellId::new(row, column));
                    }
                }
                if self.hits.len() > before {
                    self.row_hit_count += 1;
                }
            }
        }

        self.active = match self.active {
            _ if self.hits.is_empty() => None,
            None => Some(0),
            Some(i) => Some(i.min(self.hits.len() - 1)),
        };

        tracing::debug!(
            target: "search",
            hits = self.hits.len(),
            rows = self.row_hit_count,
            active = ?self.active,
            "search recomputed"
        );
    }

    /// Whether a forward step exists without wrapping
    pub fn has_next(&self) -> bool {
        self.active.is_some_and(|i| i + 1 < self.hits.len())
    }

    /// Whether a backward step exists without wrapping
    pub fn has_prev(&self) -> bool {
        self.active.is_some_and(|i| i > 0)
    }

    /// Move to the next hit, wrapping to the first. Returns true if the cursor moved.
    pub fn next(&mut self) -> bool {
        let len = self.hits.len();
        let next = match self.active {
            Some(i) if i + 1 < len => i + 1,
            _ if len > 1 => 0,
            _ => return false,
        };
        self.move_cursor(next)
    }

    /// Move to the previous hit, wrapping to the last. Returns true if the cursor moved.
    pub fn prev(&mut self) -> bool {
        let len = self.hits.len();
        let prev = match self.active {
            Some(i) if i > 0 && i < len => i - 1,
            _ if len > 1 => len - 1,
            _ => return false,
        };
        self.move_cursor(prev)
    }

    /// Distinct rows containing at least one hit
    pub fn hit_rows(&self) -> HashSet<usize> {
        self.hits.iter().map(|cell| cell.row).collect()
    }

    /// Byte ranges of `value` matching the current term
    pub fn highlights(&self, value: &str) -> Vec<Range<usize>> {
        match self.term.as_deref() {
            Some(term) => match_ranges(value, term),
            None => Vec::new(),
        }
    }

    fn move_cursor(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        tracing::trace!(target: "search", active = index, "active hit moved");
        true
    }
}

/// Byte ranges of non-overlapping case-insensitive occurrences of `term` in `value`
pub fn match_ranges(value: &str, term: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if term.is_empty() {
        return ranges;
    }

    if value.is_ascii() && term.is_ascii() {
        let (hay, needle) = (value.as_bytes(), term.as_bytes());
        let mut start = 0;
        while start + needle.len() <= hay.len() {
            if hay[start..start + needle.len()].eq_ignore_ascii_case(needle) {
                ranges.push(start..start + needle.len());
                start += needle.len();
            } else {
                start += 1;
            }
        }
        return ranges;
    }

    let needle = lower_chars(term);
    let lowered = lowered_with_spans(value);
    let mut i = 0;
    while i + needle.len() <= lowered.len() {
        let window = &lowered[i..i + needle.len()];
        if !window.iter().map(|(ch, _)| *ch).eq(needle.iter().copied()) {
            i += 1;
            continue;
        }
        let span = window[0].1.start..window[needle.len() - 1].1.end;
        match ranges.last_mut() {
            // Both matches cover part of the same source char
            Some(last) if last.end > span.start => last.end = span.end,
            _ => ranges.push(span),
        }
        i += needle.len();
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dataset;

    fn data(rows: &[&[&str]]) -> Dataset {
        let width = rows.first().map_or(0, |r| r.len());
        Dataset::from_strings(
            (0..width).map(|i| format!("c{}", i)).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn searched(table: &Dataset, term: &str) -> SearchIndex {
        let mut index = SearchIndex::new();
        index.set_term(Some(term.to_string()));
        index.refresh(table);
        index
    }

    #[test]
    fn test_hits_in_row_major_order() {
        let table = data(&[&["a", "1"], &["b", "2"], &["a", "3"]]);
        let index = searched(&table, "a");

        assert_eq!(index.hits(), &[CellId::new(0, 0), CellId::new(2, 0)]);
        assert_eq!(index.row_hit_count(), 2);
        assert_eq!(index.hit_count(), 2);
        assert_eq!(index.active_index(), Some(0));
        assert!(!index.is_dirty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let table = data(&[&["Alpha", "BETA"], &["gamma", "ÄRGER"]]);
        assert_eq!(searched(&table, "ALP").hit_count(), 1);
        assert_eq!(searched(&table, "beta").hit_count(), 1);
        assert_eq!(searched(&table, "ärg").hit_count(), 1);
    }

    #[test]
    fn test_row_hit_count_counts_distinct_rows() {
        let table = data(&[&["x", "x"], &["y", "x"]]);
        let index = searched(&table, "x");
        assert_eq!(index.hit_count(), 3);
        assert_eq!(index.row_hit_count(), 2);
        assert_eq!(index.hit_rows().len(), 2);
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let table = Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![Some("none".into())], vec![None, Some("none".into())]],
        );
        let index = searched(&table, "none");
        assert_eq!(index.hits(), &[CellId::new(0, 0), CellId::new(1, 1)]);
    }

    #[test]
    fn test_empty_term_yields_no_hits() {
        let table = data(&[&["a"]]);
        let mut index = searched(&table, "a");
        assert_eq!(index.hit_count(), 1);

        assert!(index.set_term(Some(String::new())));
        assert_eq!(index.term(), None);
        index.refresh(&table);
        assert_eq!(index.hit_count(), 0);
        assert_eq!(index.active_index(), None);
    }

    #[test]
    fn test_empty_table_yields_no_hits() {
        let index = searched(&Dataset::default(), "a");
        assert_eq!(index.hit_count(), 0);
        assert_eq!(index.active_index(), None);
    }

    #[test]
    fn test_cyclic_navigation() {
        let table = data(&[&["a"], &["a"], &["a"]]);
        let mut index = searched(&table, "a");

        assert!(index.has_next());
        assert!(!index.has_prev());
        for _ in 0..3 {
            assert!(index.next());
        }
        assert_eq!(index.active_index(), Some(0));

        assert!(index.prev());
        assert_eq!(index.active_index(), Some(2));
        assert!(!index.has_next());
        assert!(index.has_prev());
    }

    #[test]
    fn test_single_hit_navigation_is_noop() {
        let table = data(&[&["a"], &["b"]]);
        let mut index = searched(&table, "a");
        assert!(!index.next());
        assert!(!index.prev());
        assert_eq!(index.active_index(), Some(0));
    }

    #[test]
    fn test_cursor_preserved_and_clamped_on_recompute() {
        let mut table = data(&[&["a"], &["a"], &["a"]]);
        let mut index = searched(&table, "a");
        index.next();
        index.next();
        assert_eq!(index.active_index(), Some(2));

        table.apply_cell_edit(2, "c0", "z".into());
        index.mark_dirty();
        index.refresh(&table);
        assert_eq!(index.hit_count(), 2);
        assert_eq!(index.active_index(), Some(1));

        index.set_term(Some("q".into()));
        index.refresh(&table);
        assert_eq!(index.active_index(), None);
    }

    #[test]
    fn test_reset_cursor_reselects_first_hit() {
        let table = data(&[&["a"], &["a"]]);
        let mut index = searched(&table, "a");
        index.next();
        index.reset_cursor();
        assert_eq!(index.active_index(), None);

        index.mark_dirty();
        index.refresh(&table);
        assert_eq!(index.active_index(), Some(0));
    }

    #[test]
    fn test_refresh_only_when_dirty() {
        let table = data(&[&["a"]]);
        let mut index = searched(&table, "a");
        assert!(!index.refresh(&table));
        assert!(!index.set_term(Some("a".into())));
        index.mark_dirty();
        assert!(index.refresh(&table));
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("banana", "AN"), vec![1..3, 3..5]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
        assert!(match_ranges("abc", "").is_empty());
        assert!(match_ranges("abc", "x").is_empty());
        // "Ü" is two bytes in UTF-8
        assert_eq!(match_ranges("ÜberÜ", "ü"), vec![0..2, 5..7]);
    }

    #[test]
    fn test_multi_char_lowercase_is_highlighted() {
        // "İ" lowers to "i" plus a combining dot
        let table = data(&[&["İstanbul"]]);
        let index = searched(&table, "i");
        assert_eq!(index.hit_count(), 1);
        assert_eq!(index.highlights("İstanbul"), vec![0..2]);

        assert_eq!(match_ranges("İİ", "i\u{307}i"), vec![0..4]);
        assert_eq!(match_ranges("ΟΔΟΣ", "σ"), vec![6..8]);
    }
}

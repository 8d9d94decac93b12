//! Row viewport calculations
//!
//! Tracks which window of rows is on screen. The table itself never scrolls;
//! it only asks for rows to be brought into view through `Cmd::ScrollToRow`.

/// Viewport state for the table body
#[derive(Debug, Clone, Default)]
pub struct TableViewport {
    /// First visible row (0-indexed)
    pub top_row: usize,
    /// Number of rows that fit in the viewport
    pub visible_rows: usize,
}

impl TableViewport {
    /// Create a new viewport with given height
    pub fn new(visible_rows: usize) -> Self {
        Self {
            top_row: 0,
            visible_rows,
        }
    }

    /// Ensure a row is visible, scrolling the minimum amount
    pub fn ensure_visible(&mut self, row: usize, total_rows: usize) {
        if row < self.top_row {
            self.top_row = row;
        } else if row >= self.top_row + self.visible_rows && self.visible_rows > 0 {
            self.top_row = row.saturating_sub(self.visible_rows - 1);
        }

        let max_top = total_rows.saturating_sub(self.visible_rows);
        self.top_row = self.top_row.min(max_top);
    }

    /// Check if a row is visible
    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.top_row && row < self.top_row + self.visible_rows
    }

    /// Range of rows to render
    pub fn visible_range(&self, total_rows: usize) -> std::ops::Range<usize> {
        let start = self.top_row.min(total_rows);
        let end = (self.top_row + self.visible_rows).min(total_rows);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_visible_clamps_at_end() {
        let mut vp = TableViewport::new(10);
        vp.ensure_visible(99, 100);
        assert_eq!(vp.top_row, 90);

        vp.ensure_visible(3, 5);
        assert_eq!(vp.top_row, 0);
    }

    #[test]
    fn test_ensure_visible_scroll_down_and_up() {
        let mut vp = TableViewport::new(10);
        vp.ensure_visible(15, 100);
        assert_eq!(vp.top_row, 6); // 15 - 9

        vp.ensure_visible(2, 100);
        assert_eq!(vp.top_row, 2);
    }

    #[test]
    fn test_visible_range() {
        let vp = TableViewport {
            top_row: 10,
            visible_rows: 20,
        };
        assert!(vp.is_row_visible(10));
        assert!(vp.is_row_visible(29));
        assert!(!vp.is_row_visible(30));
        assert_eq!(vp.visible_range(25), 10..25);
        assert_eq!(vp.visible_range(5), 5..5);
    }
}

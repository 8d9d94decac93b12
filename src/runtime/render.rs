//! Plain-text table rendering
//!
//! Draws the rows inside the viewport with a one-character marker per cell:
//!
//! ```text
//! >  active search hit
//! #  primary or selected
//! +  drag target
//! ~  hovered during drag
//! ```
//!
//! Search matches are wrapped in `*`, a cell being edited in `[...]`.

use gridlens::grid::{CellId, TableViewport};
use gridlens::model::TableModel;
use gridlens::view::{cell_view, header_view, CellClass, CellView, Chevron, FooterStats};

/// Widest a column is allowed to grow, in characters
const MAX_COLUMN_WIDTH: usize = 24;

fn marker(class: CellClass) -> char {
    match class {
        CellClass::SearchActiveHit => '>',
        CellClass::PrimaryOrSelected => '#',
        CellClass::DragTarget => '+',
        CellClass::DragHovered => '~',
        CellClass::None => ' ',
    }
}

/// Cell text with search matches and edit state made visible
fn decorate(view: &CellView) -> String {
    let mut text = String::with_capacity(view.value.len() + 2 * view.highlights.len());
    let mut last = 0;
    for range in &view.highlights {
        text.push_str(&view.value[last..range.start]);
        text.push('*');
        text.push_str(&view.value[range.clone()]);
        text.push('*');
        last = range.end;
    }
    text.push_str(&view.value[last..]);

    if view.editing {
        format!("[{}]", text)
    } else {
        text
    }
}

/// Truncate to `width` characters and pad with spaces
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

/// Render the visible rows, header and footer
pub fn render_table(model: &TableModel, viewport: &TableViewport) -> String {
    let rows = viewport.visible_range(model.row_count());
    let headers = header_view(model);

    let header_cells: Vec<String> = headers
        .iter()
        .map(|h| match h.chevron {
            Some(Chevron::Up) => format!("{} ^", h.title),
            Some(Chevron::Down) => format!("{} v", h.title),
            None => h.title.clone(),
        })
        .collect();

    let body: Vec<(usize, Vec<(char, String)>)> = rows
        .clone()
        .map(|row| {
            let cells = (0..headers.len())
                .map(|column| {
                    let view = cell_view(model, CellId::new(row, column));
                    (marker(view.class), decorate(&view))
                })
                .collect();
            (row, cells)
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|column| {
            let widest_value = body
                .iter()
                .map(|(_, cells)| cells[column].1.chars().count())
                .max()
                .unwrap_or(0);
            widest_value
                .max(header_cells[column].chars().count())
                .clamp(1, MAX_COLUMN_WIDTH)
        })
        .collect();

    let row_label_width = rows.end.max(1).to_string().len();
    let mut out = String::new();

    out.push_str(&" ".repeat(row_label_width));
    for (title, width) in header_cells.iter().zip(&widths) {
        out.push_str(" | ");
        out.push(' ');
        out.push_str(&fit(title, *width));
    }
    out.push('\n');

    for (row, cells) in &body {
        out.push_str(&format!("{:>width$}", row, width = row_label_width));
        for ((mark, text), width) in cells.iter().zip(&widths) {
            out.push_str(" | ");
            out.push(*mark);
            out.push_str(&fit(text, *width));
        }
        out.push('\n');
    }

    if model.row_count() > rows.len() {
        out.push_str(&format!(
            "(rows {}-{} of {})\n",
            rows.start,
            rows.end.saturating_sub(1),
            model.row_count()
        ));
    }

    out.push_str(&render_footer(model));
    out
}

/// Footer lines: search summary (while searching) and totals
pub fn render_footer(model: &TableModel) -> String {
    let stats = FooterStats::from_model(model);
    let mut out = String::new();
    if let Some(line) = stats.search_line() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&stats.totals_line());
    out.push('\n');
    out
}

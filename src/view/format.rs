//! Text helpers for the footer and header

/// `word` with an `s` appended when `count` is more than one
pub fn pluralise(count: usize, word: &str) -> String {
    if count > 1 {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}

/// Format a count with `,` thousands separators
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Header title shown for a column key
pub fn column_title(key: &str) -> String {
    key.replace('_', " ")
}

/// `[i/N] Found N hits across M rows.`, or `[0/0] ...` when no hit is active
pub fn search_summary(active_position: Option<usize>, hits: usize, rows: usize) -> String {
    let position = match active_position {
        Some(pos) => format!("[{}/{}]", pos, hits),
        None => "[0/0]".to_string(),
    };
    format!(
        "{} Found {} {} across {} {}.",
        position,
        format_number(hits),
        pluralise(hits, "hit"),
        format_number(rows),
        pluralise(rows, "row")
    )
}

/// `Rendering X cells across C columns and R rows.`
pub fn totals_summary(columns: usize, rows: usize) -> String {
    let cells = if columns > 0 && rows > 0 {
        columns * rows
    } else {
        0
    };
    format!(
        "Rendering {} {} across {} {} and {} {}.",
        format_number(cells),
        pluralise(cells, "cell"),
        format_number(columns),
        pluralise(columns, "column"),
        format_number(rows),
        pluralise(rows, "row")
    )
}

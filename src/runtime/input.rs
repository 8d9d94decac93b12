//! Line command parsing
//!
//! Each input line is one shell command. Pointer commands carry screen
//! coordinates; the shorthand `click` and `drag` commands synthesize them
//! from a nominal cell geometry so they go through the same gesture
//! tracker as raw reports.

use std::fmt;
use std::path::PathBuf;

use gridlens::grid::CellId;
use gridlens::messages::{DataMsg, EditMsg, Msg, SearchMsg};

/// Nominal cell width used to place synthesized pointer reports
pub const CELL_WIDTH_PX: f64 = 120.0;
/// Nominal row height used to place synthesized pointer reports
pub const ROW_HEIGHT_PX: f64 = 24.0;

/// Screen position of the centre of a cell
pub fn cell_center(cell: CellId) -> (f64, f64) {
    (
        (cell.column as f64 + 0.5) * CELL_WIDTH_PX,
        (cell.row as f64 + 0.5) * ROW_HEIGHT_PX,
    )
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Down { cell: CellId, x: f64, y: f64 },
    Move { cell: CellId, x: f64, y: f64 },
    Up(CellId),
    Click(CellId),
    Drag { from: CellId, to: CellId },
    Search(String),
    ClearSearch,
    Next,
    Prev,
    Sort(String),
    Edit { cell: CellId, value: String },
    Copy,
    Load(PathBuf),
    Show,
    Stats,
    Help,
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub message: String,
}

impl InputError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InputError {}

pub const HELP: &str = "\
commands:
  down R C X Y     press on cell (R, C) at screen position (X, Y)
  move R C X Y     move the pointer over cell (R, C)
  up R C           release over cell (R, C)
  click R C        press and release on a cell
  drag R1 C1 R2 C2 drag from one cell to another
  search TERM      set the search term
  clear            clear the search term
  next | prev      step through search hits
  sort KEY         cycle the sort on a column
  edit R C VALUE   replace a cell value
  copy             copy the selected cells
  load PATH        replace the table with another file
  show | stats     print the table or the footer stats
  quit";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match word.to_lowercase().as_str() {
        "down" | "move" => {
            expect_args(word, &args, 4)?;
            let cell = cell_arg(args[0], args[1])?;
            let (x, y) = (coord_arg(args[2])?, coord_arg(args[3])?);
            if word.eq_ignore_ascii_case("down") {
                ShellCommand::Down { cell, x, y }
            } else {
                ShellCommand::Move { cell, x, y }
            }
        }
        "up" => {
            expect_args(word, &args, 2)?;
            ShellCommand::Up(cell_arg(args[0], args[1])?)
        }
        "click" => {
            expect_args(word, &args, 2)?;
            ShellCommand::Click(cell_arg(args[0], args[1])?)
        }
        "drag" => {
            expect_args(word, &args, 4)?;
            ShellCommand::Drag {
                from: cell_arg(args[0], args[1])?,
                to: cell_arg(args[2], args[3])?,
            }
        }
        "search" | "find" => {
            if rest.is_empty() {
                return Err(InputError::new("search needs a term"));
            }
            ShellCommand::Search(rest.to_string())
        }
        "clear" => ShellCommand::ClearSearch,
        "next" | "n" => ShellCommand::Next,
        "prev" | "p" => ShellCommand::Prev,
        "sort" => {
            expect_args(word, &args, 1)?;
            ShellCommand::Sort(args[0].to_string())
        }
        "edit" => {
            if args.len() < 2 {
                return Err(InputError::new("usage: edit R C VALUE"));
            }
            let cell = cell_arg(args[0], args[1])?;
            // Value is the remainder of the line after the two coordinates
            let value = rest
                .strip_prefix(args[0])
                .map(str::trim_start)
                .and_then(|r| r.strip_prefix(args[1]))
                .unwrap_or_default()
                .trim_start()
                .to_string();
            ShellCommand::Edit { cell, value }
        }
        "copy" => ShellCommand::Copy,
        "load" => {
            if rest.is_empty() {
                return Err(InputError::new("load needs a path"));
            }
            ShellCommand::Load(PathBuf::from(rest))
        }
        "show" => ShellCommand::Show,
        "stats" => ShellCommand::Stats,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(InputError::new(format!("unknown command: {}", other))),
    };

    Ok(Some(command))
}

impl ShellCommand {
    /// Cells named by this command
    pub fn cells(&self) -> Vec<CellId> {
        match self {
            ShellCommand::Down { cell, .. }
            | ShellCommand::Move { cell, .. }
            | ShellCommand::Up(cell)
            | ShellCommand::Click(cell)
            | ShellCommand::Edit { cell, .. } => vec![*cell],
            ShellCommand::Drag { from, to } => vec![*from, *to],
            _ => Vec::new(),
        }
    }

    /// Convert this command to message(s) for the Elm update loop
    ///
    /// Commands handled by the shell itself (`show`, `stats`, `load`, ...)
    /// map to no messages.
    pub fn to_msgs(&self) -> Vec<Msg> {
        match self {
            ShellCommand::Down { cell, x, y } => vec![Msg::pointer_down(*cell, *x, *y)],
            ShellCommand::Move { cell, x, y } => vec![Msg::pointer_move(*cell, *x, *y)],
            ShellCommand::Up(cell) => vec![Msg::pointer_up(*cell)],
            ShellCommand::Click(cell) => {
                let (x, y) = cell_center(*cell);
                vec![Msg::pointer_down(*cell, x, y), Msg::pointer_up(*cell)]
            }
            ShellCommand::Drag { from, to } => {
                let (x0, y0) = cell_center(*from);
                let (x1, y1) = cell_center(*to);
                vec![
                    Msg::pointer_down(*from, x0, y0),
                    Msg::pointer_move(*to, x1, y1),
                    Msg::pointer_up(*to),
                ]
            }
            ShellCommand::Search(term) => vec![Msg::search(term.clone())],
            ShellCommand::ClearSearch => vec![Msg::Search(SearchMsg::SetTerm(None))],
            ShellCommand::Next => vec![Msg::Search(SearchMsg::Next)],
            ShellCommand::Prev => vec![Msg::Search(SearchMsg::Prev)],
            ShellCommand::Sort(key) => vec![Msg::sort_by(key.clone())],
            ShellCommand::Edit { cell, value } => vec![
                Msg::Edit(EditMsg::Begin(*cell)),
                Msg::Edit(EditMsg::SetBuffer(value.clone())),
                Msg::Edit(EditMsg::Commit),
            ],
            ShellCommand::Copy => vec![Msg::Data(DataMsg::CopySelection)],
            ShellCommand::Load(_)
            | ShellCommand::Show
            | ShellCommand::Stats
            | ShellCommand::Help
            | ShellCommand::Quit => Vec::new(),
        }
    }
}

fn expect_args(word: &str, args: &[&str], count: usize) -> Result<(), InputError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(InputError::new(format!(
            "{} expects {} arguments, got {}",
            word,
            count,
            args.len()
        )))
    }
}

fn cell_arg(row: &str, column: &str) -> Result<CellId, InputError> {
    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| InputError::new(format!("not a cell index: {}", s)))
    };
    Ok(CellId::new(parse(row)?, parse(column)?))
}

fn coord_arg(value: &str) -> Result<f64, InputError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::new(format!("not a coordinate: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlens::messages::PointerMsg;

    fn parse(line: &str) -> ShellCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn test_pointer_commands() {
        assert_eq!(
            parse("down 1 2 10.5 20"),
            ShellCommand::Down {
                cell: CellId::new(1, 2),
                x: 10.5,
                y: 20.0
            }
        );
        assert_eq!(parse("UP 3 4"), ShellCommand::Up(CellId::new(3, 4)));
        assert!(parse_line("down 1 2 x 3").is_err());
        assert!(parse_line("up 1").is_err());
        assert!(parse_line("click -1 0").is_err());
    }

    #[test]
    fn test_search_keeps_spaces() {
        assert_eq!(parse("search  new york "), ShellCommand::Search("new york".into()));
        assert!(parse_line("search").is_err());
    }

    #[test]
    fn test_edit_value_is_rest_of_line() {
        assert_eq!(
            parse("edit 0 1 hello  world"),
            ShellCommand::Edit {
                cell: CellId::new(0, 1),
                value: "hello  world".into()
            }
        );
        assert_eq!(
            parse("edit 0 1"),
            ShellCommand::Edit {
                cell: CellId::new(0, 1),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("frobnicate").unwrap_err();
        assert_eq!(err.to_string(), "unknown command: frobnicate");
    }

    #[test]
    fn test_click_stays_within_threshold() {
        let msgs = parse("click 2 3").to_msgs();
        assert_eq!(msgs.len(), 2);
        assert!(matches!(msgs[0], Msg::Pointer(PointerMsg::Down(_))));
        assert!(matches!(msgs[1], Msg::Pointer(PointerMsg::Up(c)) if c == CellId::new(2, 3)));
    }

    #[test]
    fn test_drag_moves_between_cell_centres() {
        let msgs = parse("drag 0 0 2 1").to_msgs();
        let Msg::Pointer(PointerMsg::Move(input)) = &msgs[1] else {
            panic!("expected move, got {:?}", msgs[1]);
        };
        assert_eq!((input.x, input.y), cell_center(CellId::new(2, 1)));
        assert_eq!(input.cell, CellId::new(2, 1));
    }

    #[test]
    fn test_cells_named_by_command() {
        assert_eq!(
            parse("drag 0 1 2 3").cells(),
            vec![CellId::new(0, 1), CellId::new(2, 3)]
        );
        assert_eq!(parse("edit 4 0 x").cells(), vec![CellId::new(4, 0)]);
        assert!(parse("search x").cells().is_empty());
    }

    #[test]
    fn test_shell_only_commands_have_no_messages() {
        for line in ["show", "stats", "help", "quit", "load other.csv"] {
            assert!(parse(line).to_msgs().is_empty(), "{}", line);
        }
    }
}

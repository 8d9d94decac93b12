//! Command-line argument parsing
//!
//! Supports:
//! - Opening a delimited file
//! - Forcing the delimiter
//! - An initial search term and sort column
//! - Reading commands from a script instead of stdin

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;
use crate::grid::Delimiter;

/// Interactive table explorer
#[derive(Parser, Debug)]
#[command(name = "gridlens", version, about = "Select, search and sort tabular data")]
pub struct CliArgs {
    /// CSV/TSV file to open
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Field delimiter (comma, tab, pipe, semicolon); detected when omitted
    #[arg(short, long, value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Initial search term
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Column key to sort by (ascending) on startup
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Number of rows shown by the viewport
    #[arg(long, value_name = "N")]
    pub viewport_rows: Option<usize>,

    /// Print copied text instead of using the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}

/// Configuration derived from CLI arguments layered over the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub path: PathBuf,
    pub delimiter: Option<Delimiter>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub script: Option<PathBuf>,
    pub grid: GridConfig,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// Flags override values from `grid`.
    pub fn into_config(self, mut grid: GridConfig) -> Result<StartupConfig, String> {
        let delimiter = match self.delimiter.as_deref() {
            Some(name) => Some(
                Delimiter::from_name(name)
                    .ok_or_else(|| format!("Unknown delimiter: {}", name))?,
            ),
            None => None,
        };

        if let Some(rows) = self.viewport_rows {
            if rows == 0 {
                return Err("--viewport-rows must be at least 1".to_string());
            }
            grid.viewport_rows = rows;
        }
        if self.no_clipboard {
            grid.clipboard = false;
        }

        Ok(StartupConfig {
            path: self.path,
            delimiter,
            search: self.search.filter(|s| !s.is_empty()),
            sort: self.sort,
            script: self.script,
            grid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("gridlens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_path_only_keeps_config() {
        let config = parse(&["data.csv"])
            .into_config(GridConfig::default())
            .unwrap();
        assert_eq!(config.path, PathBuf::from("data.csv"));
        assert_eq!(config.delimiter, None);
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = parse(&[
            "data.tsv",
            "--delimiter",
            "tab",
            "--search",
            "ann",
            "--sort",
            "age",
            "--viewport-rows",
            "5",
            "--no-clipboard",
        ])
        .into_config(GridConfig::default())
        .unwrap();

        assert_eq!(config.delimiter, Some(Delimiter::Tab));
        assert_eq!(config.search.as_deref(), Some("ann"));
        assert_eq!(config.sort.as_deref(), Some("age"));
        assert_eq!(config.grid.viewport_rows, 5);
        assert!(!config.grid.clipboard);
    }

    #[test]
    fn test_unknown_delimiter() {
        let err = parse(&["x.csv", "-d", "colon"])
            .into_config(GridConfig::default())
            .unwrap_err();
        assert!(err.contains("colon"));
    }

    #[test]
    fn test_zero_viewport_rows_rejected() {
        assert!(parse(&["x.csv", "--viewport-rows", "0"])
            .into_config(GridConfig::default())
            .is_err());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(CliArgs::try_parse_from(["gridlens"]).is_err());
    }
}

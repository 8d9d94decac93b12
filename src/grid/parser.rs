//! CSV loading using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields,
//! escaped quotes, and custom delimiters. The first record is the header row.

use std::io::Read;
use std::path::Path;

use super::dataset::Dataset;

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Delimiter::Comma),
            "tsv" => Some(Delimiter::Tab),
            "psv" => Some(Delimiter::Pipe),
            _ => None,
        }
    }

    /// Parse a user-supplied delimiter name or character
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "," | "comma" => Some(Delimiter::Comma),
            "\t" | "\\t" | "tab" => Some(Delimiter::Tab),
            "|" | "pipe" => Some(Delimiter::Pipe),
            ";" | "semicolon" => Some(Delimiter::Semicolon),
            _ => None,
        }
    }
}

/// Why a table could not be loaded
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    /// 1-based record number (the header is record 1)
    pub record: Option<usize>,
}

impl ParseError {
    fn io(path: &Path, err: std::io::Error) -> Self {
        Self {
            message: format!("failed to read {}: {}", path.display(), err),
            record: None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(record) = self.record {
            write!(f, "record {}: ", record)?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse CSV content into a dataset
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<Dataset, ParseError> {
    parse_reader(content.as_bytes(), delimiter)
}

/// Parse CSV from any reader
pub fn parse_reader<R: Read>(reader: R, delimiter: Delimiter) -> Result<Dataset, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError {
            message: e.to_string(),
            record: Some(index + 1),
        })?;

        match headers {
            None => headers = Some(record.iter().map(|s| s.to_string()).collect()),
            Some(_) => rows.push(record.iter().map(|s| Some(s.to_string())).collect()),
        }
    }

    Ok(Dataset::new(headers.unwrap_or_default(), rows))
}

/// Load a CSV file, picking the delimiter from the extension or the content
pub fn load_csv(path: &Path, delimiter: Option<Delimiter>) -> Result<Dataset, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;

    let delimiter = delimiter
        .or_else(|| {
            path.extension()
                .and_then(|e| e.to_str())
                .and_then(Delimiter::from_extension)
        })
        .unwrap_or_else(|| detect_delimiter(&content));

    tracing::debug!(?delimiter, path = %path.display(), "parsing table");
    parse_csv(&content, delimiter)
}

impl Dataset {
    /// Parse CSV text with the given delimiter
    pub fn from_csv_str(content: &str, delimiter: Delimiter) -> Result<Self, ParseError> {
        parse_csv(content, delimiter)
    }

    /// Load a CSV file, detecting the delimiter when none is given
    pub fn from_csv_path(path: &Path, delimiter: Option<Delimiter>) -> Result<Self, ParseError> {
        load_csv(path, delimiter)
    }
}

/// Guess the delimiter from the first few lines
///
/// The most frequent candidate wins and ties go to the earlier entry of
/// `PREFERENCE`. Text containing none of them is read as comma separated.
pub fn detect_delimiter(content: &str) -> Delimiter {
    const PREFERENCE: [Delimiter; 4] = [
        Delimiter::Tab,
        Delimiter::Pipe,
        Delimiter::Semicolon,
        Delimiter::Comma,
    ];

    let sample: Vec<&str> = content.lines().take(5).collect();
    let occurrences = |d: Delimiter| -> usize {
        sample.iter().map(|line| line.matches(d.char()).count()).sum()
    };

    PREFERENCE
        .into_iter()
        .map(|d| (d, occurrences(d)))
        .filter(|&(_, n)| n > 0)
        .fold(None, |best: Option<(Delimiter, usize)>, (d, n)| match best {
            Some((_, most)) if most >= n => best,
            _ => Some((d, n)),
        })
        .map_or(Delimiter::Comma, |(d, _)| d)
}

use super::row::RawRow;
use crate::error::{Result, StatsError};
use std::path::Path;

/// A parsed delimited file: header tokens plus one row per non-blank body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    delimiter: char,
    rows: Vec<RawRow>,
}

impl CsvTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The delimiter that was used, explicit or detected
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// Pick `;` when the header line contains one, `,` otherwise
pub fn detect_delimiter(first_line: &str) -> char {
    if first_line.contains(';') {
        ';'
    } else {
        ','
    }
}

/// Parse delimited text into a table.
///
/// The first line is the header. Cells are split on the delimiter with no
/// quoting rules, trimmed, and zipped against the header; missing trailing
/// cells become empty strings. Lines that are empty, or whose cells are all
/// empty, produce no row. Only input with no obtainable header is an error.
pub fn parse(text: &str, delimiter: Option<char>) -> Result<CsvTable> {
    let normalized = text.replace('\r', "");
    let trimmed = normalized.trim().trim_start_matches('\u{feff}');
    if trimmed.is_empty() {
        return Err(StatsError::MalformedInput("input is empty".to_string()));
    }

    let mut lines = trimmed.split('\n');
    let Some(header_line) = lines.next() else {
        return Err(StatsError::MalformedInput("no header line".to_string()));
    };

    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(header_line));
    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(StatsError::MalformedInput(format!(
            "header line has no column names: {:?}",
            header_line
        )));
    }

    log::debug!("CSV headers ({:?}): {}", delimiter, headers.join(", "));

    let mut rows = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }

        rows.push(RawRow::from_pairs(
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.as_str(), cells.get(i).copied().unwrap_or(""))),
        ));
    }

    if rows.is_empty() {
        log::debug!("CSV has a header but no data rows");
    }

    Ok(CsvTable {
        headers,
        delimiter,
        rows,
    })
}

/// Read and parse a delimited file from disk
pub fn parse_file(path: &Path, delimiter: Option<char>) -> Result<CsvTable> {
    let content = std::fs::read_to_string(path)?;
    parse(&content, delimiter)
}

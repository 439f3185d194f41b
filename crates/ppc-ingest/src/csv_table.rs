use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Raw report contents: trimmed headers plus string cells padded to the
/// header width.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Opens a report file, reporting a missing file as [`IngestError::FileNotFound`].
pub(crate) fn open_report_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Reads a report from disk. The first non-blank record is the header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = open_report_file(path)?;
    read_csv_table_from_reader(file, path)
}

/// Reads a report from any reader; `source` only labels errors.
pub fn read_csv_table_from_reader<R: Read>(reader: R, source: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source_err| IngestError::CsvParse {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }
    table_from_records(records, source)
}

/// Builds a table from raw records of any tabular source: cells are trimmed,
/// blank records dropped, and the first remaining record becomes the header.
pub(crate) fn table_from_records<I>(records: I, source: &Path) -> Result<CsvTable>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut records = records
        .into_iter()
        .map(|record| record.iter().map(|value| normalize_cell(value)).collect::<Vec<_>>())
        .filter(|record| record.iter().any(|value| !value.is_empty()));
    let Some(header_row) = records.next() else {
        return Err(IngestError::EmptyReport {
            path: source.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    let rows = records
        .map(|mut record| {
            record.resize(headers.len(), String::new());
            record
        })
        .collect();
    Ok(CsvTable { headers, rows })
}

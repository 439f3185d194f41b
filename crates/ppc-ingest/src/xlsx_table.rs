//! Spreadsheet (XLSX) reports.
//!
//! Only the first worksheet is read. Cells are rendered to text so the sheet
//! flows through the same header resolution and numeric coercion as CSV.

use std::io::{BufReader, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Xlsx};

use crate::csv_table::{CsvTable, open_report_file, table_from_records};
use crate::error::{IngestError, Result};

/// Reads the first worksheet of an XLSX workbook on disk.
pub fn read_xlsx_table(path: &Path) -> Result<CsvTable> {
    let file = open_report_file(path)?;
    read_xlsx_table_from_reader(BufReader::new(file), path)
}

/// Reads the first worksheet from any seekable reader; `source` only labels errors.
pub fn read_xlsx_table_from_reader<R: Read + Seek>(reader: R, source: &Path) -> Result<CsvTable> {
    let workbook_error = |source_err| IngestError::Workbook {
        path: source.to_path_buf(),
        source: source_err,
    };
    let mut workbook = Xlsx::new(reader).map_err(workbook_error)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(IngestError::EmptyReport {
            path: source.to_path_buf(),
        });
    };
    let range = range.map_err(workbook_error)?;
    let records = range
        .rows()
        .map(|cells| cells.iter().map(cell_text).collect::<Vec<_>>());
    table_from_records(records, source)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
    }
}

//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::columns::ColumnResolution;

/// Errors that can occur while loading a search-term report.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Report file not found.
    #[error("report file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The file is not readable as delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Spreadsheet Errors ===
    /// The file is not a readable XLSX workbook.
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// The file has no header row.
    #[error("report is empty: {path}")]
    EmptyReport { path: PathBuf },

    // === Schema Errors ===
    /// One or more required columns could not be resolved from the headers.
    #[error("missing required columns in {path}: {missing}; detected mapping: {resolution}")]
    MissingColumns {
        path: PathBuf,
        missing: String,
        resolution: ColumnResolution,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

//! Search-term report ingestion.
//!
//! Turns an uploaded report into aggregated [`ppc_model::SearchTermRow`]s:
//! CSV or XLSX reading, header resolution, numeric coercion and per-target
//! aggregation.

pub mod aggregate;
pub mod columns;
pub mod csv_table;
pub mod error;
pub mod numeric;
pub mod report;
pub mod xlsx_table;

pub use aggregate::aggregate_rows;
pub use columns::{
    COLUMN_RULES, CanonicalField, ColumnMapping, ColumnResolution, ResolvedColumn,
    resolve_columns,
};
pub use csv_table::{CsvTable, read_csv_table, read_csv_table_from_reader};
pub use error::{IngestError, Result};
pub use numeric::{coerce_amount, coerce_orders, parse_amount};
pub use report::{
    IngestSummary, SearchTermReport, load_report, load_report_from_reader, normalize_table,
    read_report_table,
};
pub use xlsx_table::{read_xlsx_table, read_xlsx_table_from_reader};

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use ppc_model::{MatchType, SearchTermRow};

use crate::aggregate::aggregate_rows;
use crate::columns::{ColumnMapping, resolve_columns};
use crate::csv_table::{CsvTable, read_csv_table, read_csv_table_from_reader};
use crate::error::Result;
use crate::numeric::{coerce_amount, coerce_orders};
use crate::xlsx_table::read_xlsx_table;

/// Counts describing one ingestion pass.
#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub source: PathBuf,
    /// Data records read from the file.
    pub source_rows: usize,
    /// Records dropped for a blank search term, campaign or ad group.
    pub skipped_rows: usize,
    pub aggregated_rows: usize,
    pub mapping: ColumnMapping,
}

/// Normalized, aggregated report ready for analysis.
#[derive(Debug, Clone)]
pub struct SearchTermReport {
    pub rows: Vec<SearchTermRow>,
    pub summary: IngestSummary,
}

/// Loads and normalizes a search-term report file.
pub fn load_report(path: &Path) -> Result<SearchTermReport> {
    let table = read_report_table(path)?;
    normalize_table(&table, path)
}

/// Reads the raw table of a report file: `.xlsx`/`.xlsm` as a workbook,
/// anything else as CSV.
pub fn read_report_table(path: &Path) -> Result<CsvTable> {
    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xlsm"));
    if is_workbook {
        read_xlsx_table(path)
    } else {
        read_csv_table(path)
    }
}

pub fn load_report_from_reader<R: Read>(reader: R, source: &Path) -> Result<SearchTermReport> {
    let table = read_csv_table_from_reader(reader, source)?;
    normalize_table(&table, source)
}

/// Resolves columns, coerces cells and aggregates the raw table.
pub fn normalize_table(table: &CsvTable, source: &Path) -> Result<SearchTermReport> {
    let mapping = resolve_columns(&table.headers, source)?;
    for (field, column) in mapping.fields() {
        debug!(field = %field, header = %column.header, index = column.index, "column resolved");
    }

    let mut parsed = Vec::with_capacity(table.rows.len());
    let mut skipped_rows = 0usize;
    for record in &table.rows {
        let cell = |index: usize| record.get(index).map(String::as_str).unwrap_or("");
        let search_term = cell(mapping.search_term.index);
        let campaign = cell(mapping.campaign.index);
        let ad_group = cell(mapping.ad_group.index);
        if search_term.is_empty() || campaign.is_empty() || ad_group.is_empty() {
            skipped_rows += 1;
            continue;
        }
        let match_type = MatchType::from_label(Some(cell(mapping.match_type.index)));
        parsed.push(
            SearchTermRow::new(search_term, campaign, ad_group, match_type).with_metrics(
                coerce_orders(cell(mapping.orders.index)),
                coerce_amount(cell(mapping.sales.index)),
                coerce_amount(cell(mapping.spend.index)),
            ),
        );
    }
    if skipped_rows > 0 {
        warn!(
            source = %source.display(),
            skipped_rows,
            "skipped rows without search term, campaign or ad group"
        );
    }

    let rows = aggregate_rows(parsed);
    let summary = IngestSummary {
        source: source.to_path_buf(),
        source_rows: table.rows.len(),
        skipped_rows,
        aggregated_rows: rows.len(),
        mapping,
    };
    info!(
        source = %source.display(),
        source_rows = summary.source_rows,
        aggregated_rows = summary.aggregated_rows,
        "ingest complete"
    );
    Ok(SearchTermReport { rows, summary })
}

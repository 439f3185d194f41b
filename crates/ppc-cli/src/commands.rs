use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ppc_core::run_analysis;
use ppc_ingest::{ColumnResolution, load_report, read_report_table};
use ppc_model::AnalysisOptions;
use ppc_report::write_outputs;

use crate::cli::{AnalyzeArgs, ColumnsArgs};
use crate::types::AnalyzeOutcome;

pub fn analysis_options(args: &AnalyzeArgs) -> Result<AnalysisOptions> {
    let options = AnalysisOptions::new(f64::from(args.roas_threshold), args.min_orders);
    options.validate().context("invalid analysis options")?;
    Ok(options)
}

/// Default export location: an `output` folder next to the report.
pub fn default_output_dir(report: &Path) -> PathBuf {
    report
        .parent()
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let options = analysis_options(args)?;
    let span = info_span!("analyze", report = %args.report.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let report = load_report(&args.report)
        .with_context(|| format!("error processing file {}", args.report.display()))?;
    info!(
        rows = report.rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "report loaded"
    );

    let result = run_analysis(&report.rows, &options);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.report));
    let exports = if args.dry_run {
        info!("dry run: skipping export");
        None
    } else {
        let paths = write_outputs(&result, &output_dir)
            .with_context(|| format!("export to {}", output_dir.display()))?;
        Some(paths)
    };

    Ok(AnalyzeOutcome {
        report: args.report.clone(),
        output_dir,
        ingest: report.summary,
        result,
        exports,
    })
}

/// Resolves the report's headers without loading its rows.
pub fn run_columns(args: &ColumnsArgs) -> Result<ColumnResolution> {
    let table = read_report_table(&args.report)
        .with_context(|| format!("read headers of {}", args.report.display()))?;
    Ok(ColumnResolution::resolve(&table.headers))
}

use std::path::PathBuf;

use serde::Serialize;

use ppc_core::AnalysisResult;
use ppc_ingest::IngestSummary;
use ppc_report::ExportPaths;

#[derive(Debug, Serialize)]
pub struct AnalyzeOutcome {
    pub report: PathBuf,
    pub output_dir: PathBuf,
    pub ingest: IngestSummary,
    pub result: AnalysisResult,
    /// `None` on a dry run.
    pub exports: Option<ExportPaths>,
}

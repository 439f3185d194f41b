use serde::Serialize;
use tracing::info_span;

use ppc_model::{AnalysisOptions, SearchTermRow};

use crate::cannibalization::{CannibalizationReport, analyze_cannibalization};
use crate::harvest::{HarvestReport, find_harvest_candidates};

/// Both analyses over one normalized table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub options: AnalysisOptions,
    pub cannibalization: CannibalizationReport,
    pub harvest: HarvestReport,
}

pub fn run_analysis(rows: &[SearchTermRow], options: &AnalysisOptions) -> AnalysisResult {
    let span = info_span!(
        "analysis",
        rows = rows.len(),
        roas_threshold_pct = options.roas_improvement_threshold_pct,
        min_orders = options.min_orders_for_roas_winner
    );
    let _guard = span.enter();
    AnalysisResult {
        options: options.clone(),
        cannibalization: analyze_cannibalization(rows, options),
        harvest: find_harvest_candidates(rows, options),
    }
}

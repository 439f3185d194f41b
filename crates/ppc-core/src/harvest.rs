//! Keyword harvesting: converting proven non-exact terms into exact targets.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use ppc_model::{AnalysisOptions, MatchType, SearchTermRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestCandidate {
    pub search_term: String,
    pub campaign: String,
    pub ad_group: String,
    pub match_type: MatchType,
    pub orders: u64,
    pub sales: f64,
    pub spend: f64,
    pub roas: f64,
}

impl From<&SearchTermRow> for HarvestCandidate {
    fn from(row: &SearchTermRow) -> Self {
        Self {
            search_term: row.search_term.clone(),
            campaign: row.campaign.clone(),
            ad_group: row.ad_group.clone(),
            match_type: row.match_type,
            orders: row.orders,
            sales: row.sales,
            spend: row.spend,
            roas: row.roas(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HarvestSummary {
    pub new_keywords: usize,
    /// Sales already produced by the candidates.
    pub potential_revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HarvestReport {
    pub candidates: Vec<HarvestCandidate>,
    pub summary: HarvestSummary,
}

impl HarvestReport {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Lower-cased search terms already targeted as exact match.
pub fn exact_terms(rows: &[SearchTermRow]) -> HashSet<String> {
    rows.iter()
        .filter(|row| row.match_type.is_exact())
        .map(SearchTermRow::term_key)
        .collect()
}

/// Non-exact rows with at least `harvest_min_orders` orders whose term has no
/// exact-match target yet, highest sales first.
pub fn find_harvest_candidates(rows: &[SearchTermRow], options: &AnalysisOptions) -> HarvestReport {
    let exact = exact_terms(rows);
    let mut candidates: Vec<HarvestCandidate> = rows
        .iter()
        .filter(|row| !row.match_type.is_exact())
        .filter(|row| row.orders >= options.harvest_min_orders)
        .filter(|row| !exact.contains(&row.term_key()))
        .map(HarvestCandidate::from)
        .collect();
    // stable: equal sales keep table order
    candidates.sort_by(|a, b| b.sales.total_cmp(&a.sales));

    let summary = HarvestSummary {
        new_keywords: candidates.len(),
        potential_revenue: candidates.iter().map(|candidate| candidate.sales).sum(),
    };
    info!(
        exact_terms = exact.len(),
        candidates = summary.new_keywords,
        "harvest analysis complete"
    );
    HarvestReport {
        candidates,
        summary,
    }
}

//! Detection of search terms that trigger several targets.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::info;

use ppc_model::{AnalysisOptions, LOSER_REASON, SearchTermRow, Status};

use crate::engine::decide;

/// One row of the action plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRow {
    pub search_term: String,
    pub campaign: String,
    pub ad_group: String,
    pub spend: f64,
    pub sales: f64,
    pub orders: u64,
    pub roas: f64,
    pub status: Status,
    pub reason: String,
}

impl ActionRow {
    fn from_row(row: &SearchTermRow, status: Status, reason: String) -> Self {
        Self {
            search_term: row.search_term.clone(),
            campaign: row.campaign.clone(),
            ad_group: row.ad_group.clone(),
            spend: row.spend,
            sales: row.sales,
            orders: row.orders,
            roas: row.roas(),
            status,
            reason,
        }
    }
}

/// Headline numbers for the action plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CannibalizationSummary {
    /// Search terms with more than one ordering target.
    pub conflicted_terms: usize,
    /// Spend on rows recommended for negation.
    pub wasted_spend: f64,
    /// Distinct ad groups across the whole action plan.
    pub conflicting_ad_groups: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CannibalizationReport {
    pub actions: Vec<ActionRow>,
    pub summary: CannibalizationSummary,
}

impl CannibalizationReport {
    /// No search term is contested.
    pub fn is_clean(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn keep_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| action.status.is_keep())
            .count()
    }

    pub fn negate_count(&self) -> usize {
        self.actions.len() - self.keep_count()
    }
}

/// Groups ordering rows by exact search term and keeps groups with more than
/// one row. Groups come back in ascending term order, rows in table order.
pub fn conflict_groups(rows: &[SearchTermRow]) -> BTreeMap<&str, Vec<SearchTermRow>> {
    let mut groups: BTreeMap<&str, Vec<SearchTermRow>> = BTreeMap::new();
    for row in rows.iter().filter(|row| row.orders > 0) {
        groups
            .entry(row.search_term.as_str())
            .or_default()
            .push(row.clone());
    }
    groups.retain(|_, group| group.len() > 1);
    groups
}

/// Builds the KEEP/NEGATE action plan for every contested search term.
pub fn analyze_cannibalization(
    rows: &[SearchTermRow],
    options: &AnalysisOptions,
) -> CannibalizationReport {
    let groups = conflict_groups(rows);
    let mut actions = Vec::new();
    for group in groups.values() {
        let Some(decision) = decide(group, options) else {
            continue;
        };
        for (index, row) in group.iter().enumerate() {
            let status = decision.status_of(index);
            let reason = match status {
                Status::Keep => decision.reason.to_string(),
                Status::Negate => LOSER_REASON.to_string(),
            };
            actions.push(ActionRow::from_row(row, status, reason));
        }
    }
    let summary = summarize(groups.len(), &actions);
    info!(
        conflicted_terms = summary.conflicted_terms,
        action_rows = actions.len(),
        wasted_spend = summary.wasted_spend,
        "cannibalization analysis complete"
    );
    CannibalizationReport { actions, summary }
}

fn summarize(conflicted_terms: usize, actions: &[ActionRow]) -> CannibalizationSummary {
    let wasted_spend = actions
        .iter()
        .filter(|action| action.status == Status::Negate)
        .map(|action| action.spend)
        .sum();
    let conflicting_ad_groups = actions
        .iter()
        .map(|action| action.ad_group.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    CannibalizationSummary {
        conflicted_terms,
        wasted_spend,
        conflicting_ad_groups,
    }
}

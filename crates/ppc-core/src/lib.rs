//! Search-term analyses: cannibalization winner decisions and keyword
//! harvesting.

pub mod analysis;
pub mod cannibalization;
pub mod engine;
pub mod harvest;

pub use analysis::{AnalysisResult, run_analysis};
pub use cannibalization::{
    ActionRow, CannibalizationReport, CannibalizationSummary, analyze_cannibalization,
    conflict_groups,
};
pub use engine::decide;
pub use harvest::{
    HarvestCandidate, HarvestReport, HarvestSummary, exact_terms, find_harvest_candidates,
};

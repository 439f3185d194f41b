//! Data model shared by the PPC search-term analyses.

pub mod decision;
pub mod error;
pub mod match_type;
pub mod options;
pub mod row;

pub use decision::{Decision, KeepReason, LOSER_REASON, RoasImprovement, Status};
pub use error::{ModelError, Result};
pub use match_type::MatchType;
pub use options::{
    AnalysisOptions, DEFAULT_HARVEST_MIN_ORDERS, DEFAULT_MIN_ORDERS_FOR_ROAS_WINNER,
    DEFAULT_ROAS_THRESHOLD_PCT, MAX_ROAS_THRESHOLD_PCT, MIN_ROAS_THRESHOLD_PCT,
};
pub use row::SearchTermRow;

//! Configuration for the search-term analyses.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Lowest recommended ROAS improvement threshold, in percent.
pub const MIN_ROAS_THRESHOLD_PCT: f64 = 30.0;
/// Highest recommended ROAS improvement threshold, in percent.
pub const MAX_ROAS_THRESHOLD_PCT: f64 = 200.0;
pub const DEFAULT_ROAS_THRESHOLD_PCT: f64 = 100.0;
pub const DEFAULT_MIN_ORDERS_FOR_ROAS_WINNER: u64 = 2;
pub const DEFAULT_HARVEST_MIN_ORDERS: u64 = 1;

/// Options controlling the cannibalization decision and harvesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// How much better (in percent) the ROAS leader's ROAS must be than the
    /// sales leader's before it can take the group.
    pub roas_improvement_threshold_pct: f64,

    /// Orders the ROAS leader needs before its ROAS is trusted over volume.
    pub min_orders_for_roas_winner: u64,

    /// Orders a non-exact term needs to become a harvest candidate.
    pub harvest_min_orders: u64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            roas_improvement_threshold_pct: DEFAULT_ROAS_THRESHOLD_PCT,
            min_orders_for_roas_winner: DEFAULT_MIN_ORDERS_FOR_ROAS_WINNER,
            harvest_min_orders: DEFAULT_HARVEST_MIN_ORDERS,
        }
    }
}

impl AnalysisOptions {
    pub fn new(roas_improvement_threshold_pct: f64, min_orders_for_roas_winner: u64) -> Self {
        Self {
            roas_improvement_threshold_pct,
            min_orders_for_roas_winner,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_harvest_min_orders(mut self, orders: u64) -> Self {
        self.harvest_min_orders = orders;
        self
    }

    /// Improvement threshold as a fraction (100% -> 1.0).
    pub fn roas_threshold_fraction(&self) -> f64 {
        self.roas_improvement_threshold_pct / 100.0
    }

    /// Checks the operator-facing bounds.
    ///
    /// The decision engine itself accepts any threshold; this guards the
    /// values a user can pass in.
    pub fn validate(&self) -> Result<()> {
        let pct = self.roas_improvement_threshold_pct;
        if !pct.is_finite() || !(MIN_ROAS_THRESHOLD_PCT..=MAX_ROAS_THRESHOLD_PCT).contains(&pct) {
            return Err(ModelError::ThresholdOutOfRange {
                value: pct,
                min: MIN_ROAS_THRESHOLD_PCT,
                max: MAX_ROAS_THRESHOLD_PCT,
            });
        }
        if self.min_orders_for_roas_winner == 0 {
            return Err(ModelError::ZeroMinOrders);
        }
        Ok(())
    }
}

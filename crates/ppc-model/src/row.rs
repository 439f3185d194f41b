use serde::{Deserialize, Serialize};

use crate::match_type::MatchType;

/// One normalized search-term observation.
///
/// Produced once per (search term, campaign, ad group, match type) by the
/// ingestion aggregation. ROAS is not stored; [`SearchTermRow::roas`] derives
/// it from sales and spend on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTermRow {
    pub search_term: String,
    pub campaign: String,
    pub ad_group: String,
    pub match_type: MatchType,
    pub orders: u64,
    pub sales: f64,
    pub spend: f64,
}

impl SearchTermRow {
    pub fn new(
        search_term: impl Into<String>,
        campaign: impl Into<String>,
        ad_group: impl Into<String>,
        match_type: MatchType,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            campaign: campaign.into(),
            ad_group: ad_group.into(),
            match_type,
            orders: 0,
            sales: 0.0,
            spend: 0.0,
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, orders: u64, sales: f64, spend: f64) -> Self {
        self.orders = orders;
        self.sales = sales;
        self.spend = spend;
        self
    }

    /// Return on ad spend: `sales / spend`, or 0 when nothing was spent.
    pub fn roas(&self) -> f64 {
        if self.spend > 0.0 {
            self.sales / self.spend
        } else {
            0.0
        }
    }

    /// Lower-cased search term used for case-insensitive comparisons.
    pub fn term_key(&self) -> String {
        self.search_term.to_lowercase()
    }
}

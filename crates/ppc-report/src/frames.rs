//! Polars frames for the exported tables.

use polars::prelude::{Column, DataFrame};

use ppc_core::{ActionRow, HarvestCandidate};

use crate::error::Result;

/// Action plan columns, in export order.
pub const ACTION_PLAN_COLUMNS: [&str; 9] = [
    "Search Term",
    "Campaign",
    "Ad Group",
    "Spend",
    "Sales",
    "Orders",
    "ROAS",
    "Status",
    "Reason",
];

/// Harvest list columns, in export order.
pub const HARVEST_COLUMNS: [&str; 8] = [
    "Search Term",
    "Campaign",
    "Ad Group",
    "Match Type",
    "Orders",
    "Sales",
    "Spend",
    "ROAS",
];

fn text_column<T>(name: &str, rows: &[T], value: impl Fn(&T) -> &str) -> Column {
    Column::new(name.into(), rows.iter().map(value).collect::<Vec<&str>>())
}

fn float_column<T>(name: &str, rows: &[T], value: impl Fn(&T) -> f64) -> Column {
    Column::new(name.into(), rows.iter().map(value).collect::<Vec<f64>>())
}

fn count_column<T>(name: &str, rows: &[T], value: impl Fn(&T) -> u64) -> Column {
    Column::new(name.into(), rows.iter().map(value).collect::<Vec<u64>>())
}

pub fn action_plan_frame(actions: &[ActionRow]) -> Result<DataFrame> {
    let [term, campaign, ad_group, spend, sales, orders, roas, status, reason] =
        ACTION_PLAN_COLUMNS;
    let frame = DataFrame::new(vec![
        text_column(term, actions, |a| a.search_term.as_str()),
        text_column(campaign, actions, |a| a.campaign.as_str()),
        text_column(ad_group, actions, |a| a.ad_group.as_str()),
        float_column(spend, actions, |a| a.spend),
        float_column(sales, actions, |a| a.sales),
        count_column(orders, actions, |a| a.orders),
        float_column(roas, actions, |a| a.roas),
        text_column(status, actions, |a| a.status.as_str()),
        text_column(reason, actions, |a| a.reason.as_str()),
    ])?;
    Ok(frame)
}

pub fn harvest_frame(candidates: &[HarvestCandidate]) -> Result<DataFrame> {
    let [term, campaign, ad_group, match_type, orders, sales, spend, roas] = HARVEST_COLUMNS;
    let frame = DataFrame::new(vec![
        text_column(term, candidates, |c| c.search_term.as_str()),
        text_column(campaign, candidates, |c| c.campaign.as_str()),
        text_column(ad_group, candidates, |c| c.ad_group.as_str()),
        text_column(match_type, candidates, |c| c.match_type.as_str()),
        count_column(orders, candidates, |c| c.orders),
        float_column(sales, candidates, |c| c.sales),
        float_column(spend, candidates, |c| c.spend),
        float_column(roas, candidates, |c| c.roas),
    ])?;
    Ok(frame)
}

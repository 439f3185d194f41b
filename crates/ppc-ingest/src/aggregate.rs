use std::collections::BTreeMap;

use ppc_model::{MatchType, SearchTermRow};

type AggregateKey = (String, String, String, MatchType);

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    orders: u64,
    sales: f64,
    spend: f64,
}

/// Collapses rows (typically one per day) into one row per
/// (search term, campaign, ad group, match type), summing the metrics.
///
/// Output is ordered by that key, which is also the order ties are broken in
/// downstream.
pub fn aggregate_rows<I>(rows: I) -> Vec<SearchTermRow>
where
    I: IntoIterator<Item = SearchTermRow>,
{
    let mut totals: BTreeMap<AggregateKey, Totals> = BTreeMap::new();
    for row in rows {
        let entry = totals
            .entry((row.search_term, row.campaign, row.ad_group, row.match_type))
            .or_default();
        entry.orders = entry.orders.saturating_add(row.orders);
        entry.sales += row.sales;
        entry.spend += row.spend;
    }
    totals
        .into_iter()
        .map(|((search_term, campaign, ad_group, match_type), sums)| {
            SearchTermRow::new(search_term, campaign, ad_group, match_type).with_metrics(
                sums.orders,
                sums.sales,
                sums.spend,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(term: &str, campaign: &str, orders: u64, sales: f64, spend: f64) -> SearchTermRow {
        SearchTermRow::new(term, campaign, "AG1", MatchType::Broad).with_metrics(orders, sales, spend)
    }

    #[test]
    fn sums_daily_rows_per_target() {
        let rows = vec![
            daily("shoes", "C1", 1, 10.0, 4.0),
            daily("shoes", "C2", 2, 30.0, 5.0),
            daily("shoes", "C1", 3, 20.0, 6.0),
        ];
        let aggregated = aggregate_rows(rows);
        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[0].campaign, "C1");
        assert_eq!(aggregated[0].orders, 4);
        assert_eq!(aggregated[0].sales, 30.0);
        assert_eq!(aggregated[0].spend, 10.0);
        assert_eq!(aggregated[0].roas(), 3.0);
    }

    #[test]
    fn match_type_splits_groups() {
        let mut exact = daily("shoes", "C1", 1, 10.0, 4.0);
        exact.match_type = MatchType::Exact;
        let aggregated = aggregate_rows(vec![daily("shoes", "C1", 1, 10.0, 4.0), exact]);
        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[0].match_type, MatchType::Broad);
        assert_eq!(aggregated[1].match_type, MatchType::Exact);
    }

    #[test]
    fn search_term_comparison_is_case_sensitive() {
        let aggregated = aggregate_rows(vec![
            daily("Shoes", "C1", 1, 10.0, 4.0),
            daily("shoes", "C1", 1, 10.0, 4.0),
        ]);
        assert_eq!(aggregated.len(), 2);
    }
}

//! Winner decision for a group of rows competing for one search term.
//!
//! The sales leader is the default winner. The ROAS leader takes the group
//! only when its ROAS beats the sales leader's by the configured threshold
//! and it has enough orders for that ROAS to be trusted.

use tracing::debug;

use ppc_model::{AnalysisOptions, Decision, KeepReason, RoasImprovement, SearchTermRow};

/// Picks the row to keep within `group`.
///
/// Rows are assumed to share one search term; that is not checked. Ties on
/// sales or ROAS go to the row that appears first. Returns `None` only for an
/// empty group.
pub fn decide(group: &[SearchTermRow], options: &AnalysisOptions) -> Option<Decision> {
    let (sales_idx, sales_leader) = leader_by(group, |row| row.sales)?;
    let (roas_idx, roas_leader) = leader_by(group, SearchTermRow::roas)?;

    if sales_idx == roas_idx {
        return Some(Decision {
            winner: sales_idx,
            reason: KeepReason::BestSalesAndRoas,
        });
    }

    let improvement = RoasImprovement::between(sales_leader.roas(), roas_leader.roas());
    let clears_threshold = improvement.meets(options.roas_threshold_fraction());
    let challenger_orders = roas_leader.orders;
    let required_orders = options.min_orders_for_roas_winner;
    let enough_orders = challenger_orders >= required_orders;

    let decision = match (clears_threshold, enough_orders) {
        (true, true) => Decision {
            winner: roas_idx,
            reason: KeepReason::EfficientChoice { improvement },
        },
        (true, false) => Decision {
            winner: sales_idx,
            reason: KeepReason::InsufficientChallengerOrders {
                improvement,
                challenger_orders,
                required_orders,
            },
        },
        (false, false) => Decision {
            winner: sales_idx,
            reason: KeepReason::WeakChallenger {
                improvement,
                challenger_orders,
                required_orders,
            },
        },
        (false, true) => Decision {
            winner: sales_idx,
            reason: KeepReason::VolumeLeader { improvement },
        },
    };
    debug!(
        search_term = %sales_leader.search_term,
        sales_leader = sales_idx,
        roas_leader = roas_idx,
        improvement = %improvement,
        winner = decision.winner,
        "decided winner"
    );
    Some(decision)
}

/// First row holding the maximum of `metric`.
fn leader_by<F>(group: &[SearchTermRow], metric: F) -> Option<(usize, &SearchTermRow)>
where
    F: Fn(&SearchTermRow) -> f64,
{
    let mut best: Option<(usize, &SearchTermRow, f64)> = None;
    for (index, row) in group.iter().enumerate() {
        let value = metric(row);
        if best.is_none_or(|(_, _, current)| value > current) {
            best = Some((index, row, value));
        }
    }
    best.map(|(index, row, _)| (index, row))
}

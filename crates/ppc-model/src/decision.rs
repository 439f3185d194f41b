//! Outcome types for the cannibalization winner decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason text attached to every row that loses its group.
pub const LOSER_REASON: &str = "Lower Efficiency/Volume";

/// Recommended action for one row of a conflict group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Keep,
    Negate,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Keep => "KEEP",
            Status::Negate => "NEGATE",
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Status::Keep)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relative ROAS improvement of the ROAS leader over the sales leader.
///
/// When the sales leader has zero ROAS the improvement is unbounded, whatever
/// the challenger's ROAS. That case is its own variant so it compares above
/// every finite threshold without relying on a large sentinel number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoasImprovement {
    Unbounded,
    Ratio(f64),
}

impl RoasImprovement {
    /// Improvement of `challenger` over `baseline` ROAS.
    pub fn between(baseline: f64, challenger: f64) -> Self {
        if baseline == 0.0 {
            RoasImprovement::Unbounded
        } else {
            RoasImprovement::Ratio((challenger - baseline) / baseline)
        }
    }

    /// Returns true when the improvement reaches `threshold` (a fraction, 1.0 = 100%).
    pub fn meets(&self, threshold: f64) -> bool {
        match self {
            RoasImprovement::Unbounded => true,
            RoasImprovement::Ratio(ratio) => *ratio >= threshold,
        }
    }
}

/// Renders the nearest whole percent: a ratio of 0.996
/// prints as "+100%" yet does not meet a 100% threshold. Comparisons always
/// use the unrounded ratio.
impl fmt::Display for RoasImprovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoasImprovement::Unbounded => write!(f, "+∞"),
            RoasImprovement::Ratio(ratio) => write!(f, "{:+.0}%", ratio * 100.0),
        }
    }
}

/// Why the kept row of a conflict group won.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeepReason {
    /// The same row leads on both sales and ROAS.
    BestSalesAndRoas,
    /// The ROAS leader cleared the improvement threshold with enough orders.
    EfficientChoice { improvement: RoasImprovement },
    /// The ROAS leader cleared the improvement threshold but had too few orders.
    InsufficientChallengerOrders {
        improvement: RoasImprovement,
        challenger_orders: u64,
        required_orders: u64,
    },
    /// The ROAS leader missed both the improvement and the order threshold.
    WeakChallenger {
        improvement: RoasImprovement,
        challenger_orders: u64,
        required_orders: u64,
    },
    /// The ROAS leader missed the improvement threshold.
    VolumeLeader { improvement: RoasImprovement },
}

impl KeepReason {
    /// True when the sales leader was kept over a distinct ROAS leader.
    pub fn kept_sales_leader(&self) -> bool {
        matches!(
            self,
            KeepReason::InsufficientChallengerOrders { .. }
                | KeepReason::WeakChallenger { .. }
                | KeepReason::VolumeLeader { .. }
        )
    }
}

impl fmt::Display for KeepReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepReason::BestSalesAndRoas => write!(f, "Best Sales & ROAS"),
            KeepReason::EfficientChoice { improvement } => {
                write!(f, "Efficient Choice (ROAS {improvement})")
            }
            KeepReason::InsufficientChallengerOrders {
                challenger_orders,
                required_orders,
                ..
            } => write!(
                f,
                "Volume Leader (Challenger had only {challenger_orders} {}, needs {required_orders})",
                plural_orders(*challenger_orders)
            ),
            KeepReason::WeakChallenger { .. } => {
                write!(f, "Volume Leader (Challenger below ROAS and order thresholds)")
            }
            KeepReason::VolumeLeader { .. } => write!(f, "Volume Leader"),
        }
    }
}

fn plural_orders(count: u64) -> &'static str {
    if count == 1 { "order" } else { "orders" }
}

/// Winner of one conflict group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Index of the kept row within the group slice.
    pub winner: usize,
    pub reason: KeepReason,
}

impl Decision {
    /// Status of the row at `index` within the decided group.
    pub fn status_of(&self, index: usize) -> Status {
        if index == self.winner {
            Status::Keep
        } else {
            Status::Negate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_baseline_is_unbounded() {
        let improvement = RoasImprovement::between(0.0, 2.0);
        assert_eq!(improvement, RoasImprovement::Unbounded);
        assert!(improvement.meets(f64::MAX));
        assert_eq!(RoasImprovement::between(0.0, 0.0), RoasImprovement::Unbounded);
    }

    #[test]
    fn ratio_meets_inclusive_threshold() {
        let improvement = RoasImprovement::between(2.0, 4.0);
        assert_eq!(improvement, RoasImprovement::Ratio(1.0));
        assert!(improvement.meets(1.0));
        assert!(!improvement.meets(1.1));
    }

    #[test]
    fn display_rounds_but_threshold_uses_exact_ratio() {
        let improvement = RoasImprovement::Ratio(0.996);
        assert_eq!(improvement.to_string(), "+100%");
        assert!(!improvement.meets(1.0));
        assert_eq!(RoasImprovement::Ratio(-0.25).to_string(), "-25%");
    }

    #[test]
    fn reason_text() {
        let efficient = KeepReason::EfficientChoice {
            improvement: RoasImprovement::Ratio(1.0),
        };
        assert_eq!(efficient.to_string(), "Efficient Choice (ROAS +100%)");
        let unbounded = KeepReason::EfficientChoice {
            improvement: RoasImprovement::Unbounded,
        };
        assert_eq!(unbounded.to_string(), "Efficient Choice (ROAS +∞)");
        let short = KeepReason::InsufficientChallengerOrders {
            improvement: RoasImprovement::Ratio(1.0),
            challenger_orders: 1,
            required_orders: 2,
        };
        assert_eq!(
            short.to_string(),
            "Volume Leader (Challenger had only 1 order, needs 2)"
        );
        assert_eq!(
            KeepReason::VolumeLeader {
                improvement: RoasImprovement::Ratio(0.2)
            }
            .to_string(),
            "Volume Leader"
        );
    }

    #[test]
    fn decision_statuses() {
        let decision = Decision {
            winner: 1,
            reason: KeepReason::BestSalesAndRoas,
        };
        assert_eq!(decision.status_of(0), Status::Negate);
        assert_eq!(decision.status_of(1), Status::Keep);
    }
}

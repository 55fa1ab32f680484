//! Profit-rank bonus policy
//!
//! Reference bonus formula over the profit-sorted standings:
//!
//! - Rank 0 (best profit): 15% of profit
//! - Ranks 1 and 2: 10% of profit
//! - Last rank: nothing
//! - Everyone else: 5% of profit
//!
//! The top-rank rules are checked first, so with 3 or fewer sellers the
//! last-place rule never fires; a lone seller gets the 15% rate.

use super::BonusPolicy;
use crate::models::stats::SellerStats;

/// Reference bonus policy keyed on profit rank
///
/// # Example
///
/// ```
/// use sales_analytics_core::policy::{BonusPolicy, ProfitRankBonus};
/// use sales_analytics_core::{Seller, SellerStats};
///
/// let seller = Seller {
///     id: "S1".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
/// };
/// let mut stats = SellerStats::new(&seller);
/// stats.add_item("P1", 1, 500.0, 500.0);
///
/// let policy = ProfitRankBonus::new();
/// assert_eq!(policy.bonus(0, 5, &stats), 75.0); // 15% of 500
/// assert_eq!(policy.bonus(4, 5, &stats), 0.0);  // last place
/// ```
pub struct ProfitRankBonus;

impl ProfitRankBonus {
    /// Create the reference bonus policy
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProfitRankBonus {
    fn default() -> Self {
        Self::new()
    }
}

impl BonusPolicy for ProfitRankBonus {
    fn bonus(&self, rank: usize, total: usize, stats: &SellerStats) -> f64 {
        if rank == 0 {
            stats.profit() * 0.15
        } else if rank == 1 || rank == 2 {
            stats.profit() * 0.10
        } else if rank + 1 == total {
            0.0
        } else {
            stats.profit() * 0.05
        }
    }
}

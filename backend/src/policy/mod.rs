//! Policy Module
//!
//! This module defines the injected strategy interfaces for the two business
//! rules the analyzer does not hard-code:
//!
//! - **Revenue**: how much money one line item brought in
//! - **Bonus**: what a seller earns for finishing at a given profit rank
//!
//! Both are supplied by the caller through [`crate::analyzer::AnalyzerOptions`];
//! the analyzer refuses to run without them. The reference implementations
//! ([`DiscountedRevenue`], [`ProfitRankBonus`]) reproduce the default
//! formulas of the original reporting system.
//!
//! # Policy Interface
//!
//! ```rust
//! use sales_analytics_core::policy::RevenuePolicy;
//! use sales_analytics_core::{LineItem, Product};
//!
//! struct FullPrice;
//!
//! impl RevenuePolicy for FullPrice {
//!     fn item_revenue(&self, item: &LineItem, _product: &Product) -> f64 {
//!         item.sale_price * f64::from(item.quantity)
//!     }
//! }
//! ```

use crate::models::product::Product;
use crate::models::purchase::LineItem;
use crate::models::stats::SellerStats;

pub mod bonus;
pub mod revenue;

// Re-exports
pub use bonus::ProfitRankBonus;
pub use revenue::DiscountedRevenue;

/// Revenue strategy: money brought in by one line item
///
/// Implementations must be pure; the aggregation pass calls this once per
/// resolved line item, in input order, and sums the results sequentially.
pub trait RevenuePolicy: Send + Sync {
    /// Compute the revenue of one line item
    ///
    /// # Arguments
    ///
    /// * `item` - The line item being folded into the totals
    /// * `product` - The product card its SKU resolved to (for policies
    ///   that price off the catalog rather than the register line)
    fn item_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// Bonus strategy: what a seller earns for a given profit rank
///
/// Called once per seller after ranking. The returned amount is rounded to
/// 2 decimals by the analyzer; policies work with unrounded totals.
pub trait BonusPolicy: Send + Sync {
    /// Compute the bonus for the seller at `rank`
    ///
    /// # Arguments
    ///
    /// * `rank` - 0-based position after sorting by descending profit
    /// * `total` - Total number of sellers in the report
    /// * `stats` - The seller's accumulator (unrounded totals)
    fn bonus(&self, rank: usize, total: usize, stats: &SellerStats) -> f64;
}

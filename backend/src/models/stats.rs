//! Seller accumulator
//!
//! Per-seller running totals built during the aggregation pass.
//! Each accumulator is:
//! - Created zeroed, one per seller roster row
//! - Mutated monotonically while purchase records are replayed
//! - Read-only afterward (ranking, bonus derivation, formatting)
//!
//! The products-sold tally keeps an ordered sequence of (SKU, quantity) in
//! first-sale order plus a position index for O(1) updates. The sequence,
//! not map iteration order, is authoritative when quantities tie.
//!
//! CRITICAL: All money values are f64 major units; totals stay unrounded here

use std::collections::HashMap;

use crate::models::report::TopProduct;
use crate::models::seller::Seller;

/// Per-seller running totals
///
/// # Example
/// ```
/// use sales_analytics_core::{Seller, SellerStats};
///
/// let seller = Seller {
///     id: "S1".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
/// };
/// let mut stats = SellerStats::new(&seller);
///
/// stats.record_sale();
/// stats.add_item("P1", 2, 40.0, 20.0);
///
/// assert_eq!(stats.name(), "Ada Lovelace");
/// assert_eq!(stats.sales_count(), 1);
/// assert_eq!(stats.revenue(), 40.0);
/// assert_eq!(stats.profit(), 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct SellerStats {
    /// Seller identifier from the roster
    id: String,

    /// Display name (first and last name joined by a space)
    name: String,

    /// Running revenue total (unrounded)
    revenue: f64,

    /// Running profit total (unrounded)
    profit: f64,

    /// Number of purchase records attributed to this seller
    sales_count: usize,

    /// (SKU, quantity) pairs in first-sale order
    products_sold: Vec<(String, u64)>,

    /// SKU -> position in `products_sold`
    sku_positions: HashMap<String, usize>,
}

impl SellerStats {
    /// Create a zeroed accumulator for one seller roster row
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_positions: HashMap::new(),
        }
    }

    /// Get the seller identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the running revenue total (unrounded)
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Get the running profit total (unrounded)
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Get the number of purchase records attributed to this seller
    pub fn sales_count(&self) -> usize {
        self.sales_count
    }

    /// Iterate (SKU, quantity) tallies in first-sale order
    pub fn products_sold(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.products_sold
            .iter()
            .map(|(sku, quantity)| (sku.as_str(), *quantity))
    }

    /// Count one purchase record for this seller
    ///
    /// Called once per resolved record, before its line items are processed.
    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// Fold one line item into the totals
    ///
    /// Adds `revenue` and `profit` to the running sums and `quantity` to the
    /// per-SKU tally, creating the tally entry at 0 on first sight of the SKU.
    /// Summation is sequential; callers must preserve record/item order.
    pub fn add_item(&mut self, sku: &str, quantity: u32, revenue: f64, profit: f64) {
        self.revenue += revenue;
        self.profit += profit;

        let position = match self.sku_positions.get(sku) {
            Some(&position) => position,
            None => {
                self.products_sold.push((sku.to_string(), 0));
                let position = self.products_sold.len() - 1;
                self.sku_positions.insert(sku.to_string(), position);
                position
            }
        };
        self.products_sold[position].1 += u64::from(quantity);
    }

    /// Best-selling SKUs by quantity, descending, at most `limit` entries
    ///
    /// The sort is stable: SKUs with equal quantities keep first-sale order.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

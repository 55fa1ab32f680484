//! Report output types
//!
//! The final projection of an accumulator after ranking: monetary fields
//! rounded to 2 decimals, top products limited and ordered by quantity.

use serde::{Deserialize, Serialize};

/// One entry of a seller's top-products list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Product SKU
    pub sku: String,

    /// Total units of this SKU the seller sold
    pub quantity: u64,
}

/// Final per-seller report entry
///
/// Produced by the analyzer in descending-profit order. `revenue`, `profit`,
/// and `bonus` are rounded to 2 decimals; `top_products` holds at most 10
/// entries sorted by descending quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    /// Seller identifier from the input roster
    pub seller_id: String,

    /// Display name (first and last name)
    pub name: String,

    /// Total revenue, rounded to 2 decimals
    pub revenue: f64,

    /// Total profit, rounded to 2 decimals
    pub profit: f64,

    /// Number of purchase records attributed to this seller
    pub sales_count: usize,

    /// Up to 10 best-selling SKUs by quantity, descending
    pub top_products: Vec<TopProduct>,

    /// Rank-dependent bonus, rounded to 2 decimals
    pub bonus: f64,
}

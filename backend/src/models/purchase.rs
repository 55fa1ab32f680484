//! Purchase record model
//!
//! Represents one transaction at the register: the owning seller plus the
//! product line items sold. Each line item carries its own quantity, sale
//! price, and discount percentage.
//!
//! CRITICAL: All money values are f64 major units

use serde::{Deserialize, Serialize};

/// One product line within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// SKU of the product sold, resolved against the product list
    pub sku: String,

    /// Units sold on this line
    pub quantity: u32,

    /// Per-unit sale price before discount (f64 major units)
    pub sale_price: f64,

    /// Discount percentage in [0, 100]
    pub discount: f64,
}

/// One transaction: a seller and the lines sold in it
///
/// # Example
/// ```
/// use sales_analytics_core::{LineItem, PurchaseRecord};
///
/// let record = PurchaseRecord {
///     seller_id: "S1".to_string(),
///     total_amount: 40.0,
///     items: vec![LineItem {
///         sku: "P1".to_string(),
///         quantity: 2,
///         sale_price: 20.0,
///         discount: 0.0,
///     }],
/// };
/// assert_eq!(record.items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller who owns this transaction
    pub seller_id: String,

    /// Register total as reported in the input; not read by the
    /// aggregation pass, which sums line items through the revenue policy
    pub total_amount: f64,

    /// Line items in register order
    pub items: Vec<LineItem>,
}

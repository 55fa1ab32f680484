//! Product model
//!
//! The product card supplies the cost basis for profit calculation.
//! Products are keyed by SKU; the SKU is expected to be unique.
//!
//! CRITICAL: All money values are f64 major units

use serde::{Deserialize, Serialize};

/// A product card as supplied in the input bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stock keeping unit, unique per product
    pub sku: String,

    /// Unit cost to the business (f64 major units)
    pub purchase_price: f64,
}

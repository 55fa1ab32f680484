//! Input bundle
//!
//! The complete dataset handed to one analysis call. All three collections
//! must be non-empty; the analyzer validates this before touching anything.

use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::models::purchase::PurchaseRecord;
use crate::models::seller::Seller;

/// The raw input bundle for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    /// Seller roster, in display order
    pub sellers: Vec<Seller>,

    /// Product catalog, keyed by SKU
    pub products: Vec<Product>,

    /// Purchase records in register order; aggregation replays this order
    pub purchase_records: Vec<PurchaseRecord>,
}

//! Seller model
//!
//! One row of the seller roster in the input bundle. Carries identity and
//! the name parts used for report display.

use serde::{Deserialize, Serialize};

/// A seller as supplied in the input bundle
///
/// # Example
/// ```
/// use sales_analytics_core::Seller;
///
/// let seller = Seller {
///     id: "S1".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
/// };
/// assert_eq!(seller.display_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller identifier (e.g., "S1")
    pub id: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name joined by a single space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

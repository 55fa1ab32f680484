//! Domain models for the sales analytics engine

pub mod dataset;
pub mod product;
pub mod purchase;
pub mod report;
pub mod seller;
pub mod stats;

// Re-exports
pub use dataset::SalesData;
pub use product::Product;
pub use purchase::{LineItem, PurchaseRecord};
pub use report::{SellerReport, TopProduct};
pub use seller::Seller;
pub use stats::SellerStats;

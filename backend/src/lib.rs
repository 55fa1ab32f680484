//! Sales Analytics Core - Rust Engine
//!
//! Single-pass, in-memory sales report generator with deterministic execution.
//!
//! Takes a batch of purchase records and produces one report entry per seller:
//! total revenue, profit, sales count, top-selling products, and a rank-based
//! bonus. The revenue and bonus formulas are injected policies, not fixed
//! logic.
//!
//! # Architecture
//!
//! - **core**: Monetary rounding
//! - **models**: Domain types (Seller, Product, PurchaseRecord, SellerStats, SellerReport)
//! - **policy**: Injected revenue and bonus strategies
//! - **analyzer**: The aggregation pipeline
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 major units; rounding to 2 decimals happens
//!    only when report fields are produced
//! 2. Accumulation is sequential in record order then item order, never
//!    reordered, so results are reproducible bit for bit
//! 3. Each analysis call builds fresh accumulators and indexes; there is no
//!    cross-call state and no I/O

// Module declarations
pub mod analyzer;
pub mod core;
pub mod models;
pub mod policy;

// Re-exports for convenience
pub use analyzer::{
    analyze_sales_data, AnalysisError, AnalyzerOptions, SalesAnalyzer, TOP_PRODUCTS_LIMIT,
};
pub use models::{
    dataset::SalesData,
    product::Product,
    purchase::{LineItem, PurchaseRecord},
    report::{SellerReport, TopProduct},
    seller::Seller,
    stats::SellerStats,
};
pub use policy::{BonusPolicy, DiscountedRevenue, ProfitRankBonus, RevenuePolicy};
pub use self::core::money::round_money;

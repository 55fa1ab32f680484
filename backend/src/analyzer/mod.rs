//! Analyzer - the aggregation pipeline
//!
//! Validates the input bundle, replays purchase records into per-seller
//! accumulators, ranks sellers by profit, and projects the final reports.
//!
//! See `engine.rs` for the implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    analyze_sales_data, AnalysisError, AnalyzerOptions, SalesAnalyzer, TOP_PRODUCTS_LIMIT,
};

//! Analyzer Engine
//!
//! One blocking pass over in-memory data:
//!
//! ```text
//! 1. Validate the input bundle (non-empty collections)
//! 2. Resolve the injected policies (both required)
//! 3. Build one zeroed accumulator per seller, in roster order
//! 4. Index seller id -> accumulator position, SKU -> product card
//! 5. Replay purchase records in input order into the accumulators
//! 6. Stable-sort accumulators by descending profit
//! 7. Derive bonus (rank-dependent policy) and top products per seller
//! 8. Project into report entries with monetary rounding
//! ```
//!
//! Records whose seller id does not resolve are skipped whole; line items
//! whose SKU does not resolve are skipped individually. Both skips are
//! logged at debug level and are not errors.
//!
//! # Example
//!
//! ```rust
//! use sales_analytics_core::{
//!     analyze_sales_data, AnalyzerOptions, DiscountedRevenue, LineItem, Product,
//!     ProfitRankBonus, PurchaseRecord, SalesData, Seller,
//! };
//!
//! let data = SalesData {
//!     sellers: vec![Seller {
//!         id: "S1".to_string(),
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!     }],
//!     products: vec![Product { sku: "P1".to_string(), purchase_price: 10.0 }],
//!     purchase_records: vec![PurchaseRecord {
//!         seller_id: "S1".to_string(),
//!         total_amount: 40.0,
//!         items: vec![LineItem {
//!             sku: "P1".to_string(),
//!             quantity: 2,
//!             sale_price: 20.0,
//!             discount: 0.0,
//!         }],
//!     }],
//! };
//!
//! let options = AnalyzerOptions::new()
//!     .with_revenue_policy(DiscountedRevenue::new())
//!     .with_bonus_policy(ProfitRankBonus::new());
//!
//! let reports = analyze_sales_data(&data, options).unwrap();
//! assert_eq!(reports[0].revenue, 40.0);
//! assert_eq!(reports[0].profit, 20.0);
//! assert_eq!(reports[0].sales_count, 1);
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::core::money::round_money;
use crate::models::dataset::SalesData;
use crate::models::product::Product;
use crate::models::purchase::PurchaseRecord;
use crate::models::report::SellerReport;
use crate::models::seller::Seller;
use crate::models::stats::SellerStats;
use crate::policy::{BonusPolicy, RevenuePolicy};

/// Maximum number of entries in a seller's top-products list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised before the aggregation pass touches anything
///
/// Both kinds abort the analysis immediately; there is nothing to retry.
/// Unresolved seller ids and SKUs during aggregation are skips, not errors.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// The input bundle is unusable: a required collection is empty
    #[error("invalid input data: {0}")]
    InvalidInput(&'static str),

    /// A required policy was not supplied in the options
    #[error("missing required policy: {0}")]
    MissingPolicy(&'static str),
}

// ============================================================================
// Options
// ============================================================================

/// Injected policy bundle for one analyzer
///
/// Both policies are required; [`SalesAnalyzer::analyze`] fails with
/// [`AnalysisError::MissingPolicy`] if either slot is still empty.
///
/// # Example
///
/// ```
/// use sales_analytics_core::{AnalyzerOptions, DiscountedRevenue, ProfitRankBonus};
///
/// let options = AnalyzerOptions::new()
///     .with_revenue_policy(DiscountedRevenue::new())
///     .with_bonus_policy(ProfitRankBonus::new());
/// ```
#[derive(Default)]
pub struct AnalyzerOptions {
    revenue_policy: Option<Box<dyn RevenuePolicy>>,
    bonus_policy: Option<Box<dyn BonusPolicy>>,
}

impl AnalyzerOptions {
    /// Create an empty options bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the revenue policy (builder pattern)
    pub fn with_revenue_policy(mut self, policy: impl RevenuePolicy + 'static) -> Self {
        self.revenue_policy = Some(Box::new(policy));
        self
    }

    /// Set the bonus policy (builder pattern)
    pub fn with_bonus_policy(mut self, policy: impl BonusPolicy + 'static) -> Self {
        self.bonus_policy = Some(Box::new(policy));
        self
    }

    /// Resolve both policies or report which one is missing
    fn require(&self) -> Result<(&dyn RevenuePolicy, &dyn BonusPolicy), AnalysisError> {
        let revenue = self
            .revenue_policy
            .as_deref()
            .ok_or(AnalysisError::MissingPolicy("revenue"))?;
        let bonus = self
            .bonus_policy
            .as_deref()
            .ok_or(AnalysisError::MissingPolicy("bonus"))?;
        Ok((revenue, bonus))
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// The sales report generator
///
/// Holds the injected policies; each [`Self::analyze`] call runs the full
/// pipeline over a borrowed input bundle with fresh accumulators, so one
/// analyzer can serve any number of datasets.
pub struct SalesAnalyzer {
    options: AnalyzerOptions,
}

impl SalesAnalyzer {
    /// Create an analyzer with the given policy bundle
    ///
    /// Policies are validated per `analyze` call, mirroring the input
    /// checks, so construction itself cannot fail.
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Run the analysis and return report entries in descending-profit order
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidInput`] if any input collection is empty
    /// - [`AnalysisError::MissingPolicy`] if a policy slot is unset
    pub fn analyze(&self, data: &SalesData) -> Result<Vec<SellerReport>, AnalysisError> {
        validate_input(data)?;
        let (revenue_policy, bonus_policy) = self.options.require()?;

        let mut stats = prepare_seller_stats(&data.sellers);
        let seller_index = build_seller_index(&stats);
        let product_index = build_product_index(&data.products);

        process_purchase_records(
            &data.purchase_records,
            &seller_index,
            &product_index,
            revenue_policy,
            &mut stats,
        );

        // Stable sort: equal profits keep roster order
        stats.sort_by(|a, b| b.profit().total_cmp(&a.profit()));

        Ok(build_reports(&stats, bonus_policy))
    }
}

/// Analyze a dataset with a one-shot options bundle
///
/// Convenience wrapper over [`SalesAnalyzer`]; see the module example.
pub fn analyze_sales_data(
    data: &SalesData,
    options: AnalyzerOptions,
) -> Result<Vec<SellerReport>, AnalysisError> {
    SalesAnalyzer::new(options).analyze(data)
}

// ============================================================================
// Pipeline stages
// ============================================================================

/// Reject bundles missing any of the three required collections
fn validate_input(data: &SalesData) -> Result<(), AnalysisError> {
    if data.sellers.is_empty() {
        return Err(AnalysisError::InvalidInput("sellers must not be empty"));
    }
    if data.products.is_empty() {
        return Err(AnalysisError::InvalidInput("products must not be empty"));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "purchase_records must not be empty",
        ));
    }
    Ok(())
}

/// One zeroed accumulator per roster row, preserving roster order
///
/// Duplicate seller ids are not deduplicated here; each row gets its own
/// accumulator and indexing decides which one receives records.
fn prepare_seller_stats(sellers: &[Seller]) -> Vec<SellerStats> {
    sellers.iter().map(SellerStats::new).collect()
}

/// Seller id -> position in the stats vector, last write wins
fn build_seller_index(stats: &[SellerStats]) -> HashMap<String, usize> {
    stats
        .iter()
        .enumerate()
        .map(|(position, seller)| (seller.id().to_string(), position))
        .collect()
}

/// SKU -> product card, last write wins
fn build_product_index(products: &[Product]) -> HashMap<&str, &Product> {
    products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect()
}

/// Replay purchase records into the accumulators, in input order
///
/// Unresolved seller ids skip the whole record before any mutation;
/// unresolved SKUs skip the single line item. Summation is sequential and
/// never reordered, so reruns reproduce results bit for bit.
fn process_purchase_records(
    records: &[PurchaseRecord],
    seller_index: &HashMap<String, usize>,
    product_index: &HashMap<&str, &Product>,
    revenue_policy: &dyn RevenuePolicy,
    stats: &mut [SellerStats],
) {
    for record in records {
        let position = match seller_index.get(record.seller_id.as_str()) {
            Some(&position) => position,
            None => {
                tracing::debug!(
                    seller_id = %record.seller_id,
                    "skipping purchase record for unknown seller"
                );
                continue;
            }
        };
        let seller = &mut stats[position];
        seller.record_sale();

        for item in &record.items {
            let product = match product_index.get(item.sku.as_str()) {
                Some(product) => *product,
                None => {
                    tracing::debug!(sku = %item.sku, "skipping line item for unknown product");
                    continue;
                }
            };

            let revenue = revenue_policy.item_revenue(item, product);
            let cost = product.purchase_price * f64::from(item.quantity);
            seller.add_item(&item.sku, item.quantity, revenue, revenue - cost);
        }
    }
}

/// Derive bonus and top products per ranked seller and project the reports
///
/// `ranked` must already be in descending-profit order; output preserves it.
/// The bonus policy sees unrounded totals; its result and the monetary
/// totals are rounded here, in one place.
fn build_reports(ranked: &[SellerStats], bonus_policy: &dyn BonusPolicy) -> Vec<SellerReport> {
    let total = ranked.len();
    ranked
        .iter()
        .enumerate()
        .map(|(rank, seller)| {
            let bonus = round_money(bonus_policy.bonus(rank, total, seller));
            SellerReport {
                seller_id: seller.id().to_string(),
                name: seller.name().to_string(),
                revenue: round_money(seller.revenue()),
                profit: round_money(seller.profit()),
                sales_count: seller.sales_count(),
                top_products: seller.top_products(TOP_PRODUCTS_LIMIT),
                bonus,
            }
        })
        .collect()
}

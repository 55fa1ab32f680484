//! Analyzer Pipeline Tests
//!
//! End-to-end tests of the aggregation pipeline: validation, indexing,
//! record replay, ranking, bonus derivation, and report formatting.

use sales_analytics_core::{
    analyze_sales_data, AnalysisError, AnalyzerOptions, DiscountedRevenue, LineItem, Product,
    ProfitRankBonus, PurchaseRecord, SalesData, Seller,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn seller(id: &str, first_name: &str, last_name: &str) -> Seller {
    Seller {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

fn product(sku: &str, purchase_price: f64) -> Product {
    Product {
        sku: sku.to_string(),
        purchase_price,
    }
}

fn item(sku: &str, quantity: u32, sale_price: f64, discount: f64) -> LineItem {
    LineItem {
        sku: sku.to_string(),
        quantity,
        sale_price,
        discount,
    }
}

fn record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
    PurchaseRecord {
        seller_id: seller_id.to_string(),
        total_amount: 0.0,
        items,
    }
}

fn reference_options() -> AnalyzerOptions {
    AnalyzerOptions::new()
        .with_revenue_policy(DiscountedRevenue::new())
        .with_bonus_policy(ProfitRankBonus::new())
}

// ============================================================================
// Basic Scenario
// ============================================================================

#[test]
fn test_single_seller_single_product_scenario() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace")],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record("S1", vec![item("P1", 2, 20.0, 0.0)])],
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.seller_id, "S1");
    assert_eq!(report.name, "Ada Lovelace");
    assert_eq!(report.revenue, 40.0, "2 units at 20.0, no discount");
    assert_eq!(report.profit, 20.0, "revenue 40.0 minus cost 20.0");
    assert_eq!(report.sales_count, 1);
    assert_eq!(report.top_products.len(), 1);
    assert_eq!(report.top_products[0].sku, "P1");
    assert_eq!(report.top_products[0].quantity, 2);
    assert_eq!(report.bonus, 3.0, "lone seller gets 15% of profit");
}

// ============================================================================
// Input Validation
// ============================================================================

#[test]
fn test_empty_sellers_is_invalid_input() {
    let data = SalesData {
        sellers: vec![],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record("S1", vec![])],
    };

    let err = analyze_sales_data(&data, reference_options()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

#[test]
fn test_empty_products_is_invalid_input() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace")],
        products: vec![],
        purchase_records: vec![record("S1", vec![])],
    };

    let err = analyze_sales_data(&data, reference_options()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

#[test]
fn test_empty_purchase_records_is_invalid_input() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace")],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![],
    };

    let err = analyze_sales_data(&data, reference_options()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

#[test]
fn test_missing_bonus_policy() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace")],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record("S1", vec![])],
    };

    let options = AnalyzerOptions::new().with_revenue_policy(DiscountedRevenue::new());
    let err = analyze_sales_data(&data, options).unwrap_err();
    assert_eq!(err, AnalysisError::MissingPolicy("bonus"));
}

#[test]
fn test_missing_revenue_policy() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace")],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record("S1", vec![])],
    };

    let options = AnalyzerOptions::new().with_bonus_policy(ProfitRankBonus::new());
    let err = analyze_sales_data(&data, options).unwrap_err();
    assert_eq!(err, AnalysisError::MissingPolicy("revenue"));
}

#[test]
fn test_input_is_validated_before_options() {
    let data = SalesData {
        sellers: vec![],
        products: vec![],
        purchase_records: vec![],
    };

    // Both the bundle and the options are bad; the bundle reports first
    let err = analyze_sales_data(&data, AnalyzerOptions::new()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

// ============================================================================
// Skip Policies
// ============================================================================

#[test]
fn test_unknown_seller_record_is_skipped_whole() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace"), seller("S2", "Bob", "Jones")],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record("S99", vec![item("P1", 3, 20.0, 0.0)])],
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    // No record resolved; every seller stays zeroed, ties keep roster order
    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert_eq!(report.revenue, 0.0);
        assert_eq!(report.profit, 0.0);
        assert_eq!(report.sales_count, 0);
        assert!(report.top_products.is_empty());
        assert_eq!(report.bonus, 0.0);
    }
    assert_eq!(reports[0].seller_id, "S1");
    assert_eq!(reports[1].seller_id, "S2");
}

#[test]
fn test_unknown_sku_item_is_skipped_alone() {
    let data = SalesData {
        sellers: vec![seller("S1", "Ada", "Lovelace")],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record(
            "S1",
            vec![item("P1", 2, 20.0, 0.0), item("GHOST", 5, 100.0, 0.0)],
        )],
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    let report = &reports[0];
    assert_eq!(report.sales_count, 1, "the record itself still counts");
    assert_eq!(report.revenue, 40.0, "only the resolved item contributes");
    assert_eq!(report.profit, 20.0);
    assert_eq!(report.top_products.len(), 1);
    assert_eq!(report.top_products[0].sku, "P1");
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_output_sorted_by_descending_profit() {
    let data = SalesData {
        sellers: vec![
            seller("LOW", "Lou", "Low"),
            seller("HIGH", "Hanna", "High"),
            seller("MID", "Mia", "Mid"),
        ],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![
            record("LOW", vec![item("P1", 1, 15.0, 0.0)]),
            record("HIGH", vec![item("P1", 1, 45.0, 0.0)]),
            record("MID", vec![item("P1", 1, 30.0, 0.0)]),
        ],
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    let order: Vec<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(order, vec!["HIGH", "MID", "LOW"]);
}

#[test]
fn test_profit_ties_keep_roster_order() {
    let data = SalesData {
        sellers: vec![
            seller("S1", "Ada", "Lovelace"),
            seller("S2", "Bob", "Jones"),
            seller("S3", "Cat", "Mills"),
        ],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![
            // S1 and S2 end up with identical profit; S3 is ahead
            record("S1", vec![item("P1", 1, 30.0, 0.0)]),
            record("S2", vec![item("P1", 1, 30.0, 0.0)]),
            record("S3", vec![item("P1", 1, 60.0, 0.0)]),
        ],
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    let order: Vec<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(order, vec!["S3", "S1", "S2"], "ties must not reorder");
}

// ============================================================================
// Bonus Boundary
// ============================================================================

#[test]
fn test_five_seller_bonus_boundary() {
    // Profits land at [500, 400, 300, 200, 100]
    let sale_prices = [150.0, 140.0, 130.0, 120.0, 110.0];
    let sellers: Vec<Seller> = (0..5)
        .map(|i| seller(&format!("S{}", i), "Test", &format!("Seller{}", i)))
        .collect();
    let purchase_records: Vec<PurchaseRecord> = sale_prices
        .iter()
        .enumerate()
        .map(|(i, &sale_price)| record(&format!("S{}", i), vec![item("P1", 10, sale_price, 0.0)]))
        .collect();

    let data = SalesData {
        sellers,
        products: vec![product("P1", 100.0)],
        purchase_records,
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    let profits: Vec<f64> = reports.iter().map(|r| r.profit).collect();
    assert_eq!(profits, vec![500.0, 400.0, 300.0, 200.0, 100.0]);

    let bonuses: Vec<f64> = reports.iter().map(|r| r.bonus).collect();
    assert_eq!(
        bonuses,
        vec![75.0, 40.0, 30.0, 10.0, 0.0],
        "ranks 0..4 pay 15%, 10%, 10%, 5%, 0%"
    );
}

// ============================================================================
// Duplicate Identifiers
// ============================================================================

#[test]
fn test_duplicate_seller_id_last_roster_row_wins() {
    let data = SalesData {
        sellers: vec![
            seller("S1", "Alice", "One"),
            seller("S2", "Bob", "Two"),
            seller("S1", "Anna", "Three"),
        ],
        products: vec![product("P1", 10.0)],
        purchase_records: vec![record("S1", vec![item("P1", 1, 20.0, 0.0)])],
    };

    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    // Both S1 rows appear, but the record went to the later one
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].name, "Anna Three");
    assert_eq!(reports[0].sales_count, 1);
    assert_eq!(reports[0].profit, 10.0);

    let alice = reports.iter().find(|r| r.name == "Alice One").unwrap();
    assert_eq!(alice.sales_count, 0);
    assert_eq!(alice.profit, 0.0);
}

// ============================================================================
// JSON Input
// ============================================================================

const DATASET_JSON: &str = r#"{
    "sellers": [
        {"id": "S1", "first_name": "Alice", "last_name": "Smith"},
        {"id": "S2", "first_name": "Bob", "last_name": "Jones"}
    ],
    "products": [
        {"sku": "TEA", "purchase_price": 6.0},
        {"sku": "MUG", "purchase_price": 2.5}
    ],
    "purchase_records": [
        {
            "seller_id": "S1",
            "total_amount": 35.0,
            "items": [
                {"sku": "TEA", "quantity": 2, "sale_price": 10.0, "discount": 0.0},
                {"sku": "MUG", "quantity": 4, "sale_price": 5.0, "discount": 25.0}
            ]
        },
        {
            "seller_id": "S2",
            "total_amount": 10.0,
            "items": [
                {"sku": "TEA", "quantity": 1, "sale_price": 10.0, "discount": 0.0}
            ]
        }
    ]
}"#;

#[test]
fn test_json_dataset_end_to_end() {
    let data: SalesData = serde_json::from_str(DATASET_JSON).unwrap();
    let reports = analyze_sales_data(&data, reference_options()).unwrap();

    assert_eq!(reports.len(), 2);

    let alice = &reports[0];
    assert_eq!(alice.name, "Alice Smith");
    assert_eq!(alice.revenue, 35.0, "20.0 for tea plus 15.0 for mugs");
    assert_eq!(alice.profit, 13.0, "8.0 on tea plus 5.0 on mugs");
    assert_eq!(alice.sales_count, 1);
    assert_eq!(alice.top_products.len(), 2);
    assert_eq!(alice.top_products[0].sku, "MUG");
    assert_eq!(alice.top_products[0].quantity, 4);
    assert_eq!(alice.bonus, 1.95, "rank 0 pays 15% of 13.0");

    let bob = &reports[1];
    assert_eq!(bob.name, "Bob Jones");
    assert_eq!(bob.revenue, 10.0);
    assert_eq!(bob.profit, 4.0);
    assert_eq!(bob.bonus, 0.4, "second of two pays 10%, not last-place 0");
}

//! sales-report - JSON front-end for the sales analytics engine
//!
//! Reads a dataset file ({sellers, products, purchase_records}), runs the
//! analyzer with the reference policies, and prints the report as JSON.
//! Set RUST_LOG=sales_analytics_core=debug to see skipped records.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sales_analytics_core::{
    analyze_sales_data, AnalyzerOptions, DiscountedRevenue, ProfitRankBonus, SalesData,
};

#[derive(Parser)]
#[command(name = "sales-report")]
#[command(about = "Generate a per-seller sales report from a JSON dataset")]
struct Cli {
    /// Path to the JSON dataset file
    data: PathBuf,

    /// Pretty-print the report JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.data)
        .with_context(|| format!("reading {}", cli.data.display()))?;
    let data: SalesData = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.data.display()))?;

    let options = AnalyzerOptions::new()
        .with_revenue_policy(DiscountedRevenue::new())
        .with_bonus_policy(ProfitRankBonus::new());
    let reports = analyze_sales_data(&data, options)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{output}");

    Ok(())
}

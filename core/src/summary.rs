// stockroom/src/summary.rs

//! Dashboard aggregates over the product and sale collections.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::compute_dead_inventory;
use crate::model::{Product, Sale};

/// Products with fewer units than this across all stores count as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
  pub total_products: usize,
  pub total_units: u64,
  pub low_stock_count: usize,
  pub categories: Vec<String>,
  pub dead_inventory_count: usize,
  pub dead_inventory_units: u64,
  pub dead_inventory_value: f64,
  /// Units sold per calendar month, January first, across all years.
  pub monthly_sales: [u64; 12],
}

pub fn summarize(
  products: &[Product],
  sales: &[Sale],
  now: DateTime<Utc>,
  threshold_days: i64,
  low_stock_threshold: u64,
) -> DashboardSummary {
  let dead = compute_dead_inventory(products, now, threshold_days);

  let categories: BTreeSet<String> = products
    .iter()
    .filter_map(|p| p.category.as_deref())
    .map(str::trim)
    .filter(|c| !c.is_empty())
    .map(str::to_string)
    .collect();

  let mut monthly_sales = [0u64; 12];
  for sale in sales {
    monthly_sales[sale.date.month0() as usize] += u64::from(sale.quantity);
  }

  DashboardSummary {
    total_products: products.len(),
    total_units: products.iter().map(Product::total_stock).sum(),
    low_stock_count: products.iter().filter(|p| p.total_stock() < low_stock_threshold).count(),
    categories: categories.into_iter().collect(),
    dead_inventory_count: dead.len(),
    dead_inventory_units: dead.iter().map(|d| u64::from(d.stock)).sum(),
    dead_inventory_value: dead.iter().map(|d| d.estimated_value).sum(),
    monthly_sales,
  }
}

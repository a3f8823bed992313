// stockroom/src/analyzer.rs

//! Dead-inventory detection.
//!
//! A product is dead inventory when its *first* stock record has gone at
//! least `threshold_days` whole days without a sale and still holds stock.
//! Later stock records are never consulted. Each flagged product carries the
//! same three suggested actions; only the first one depends on quantity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::model::{EntityId, Product};

/// Days without a sale after which stock counts as dead.
pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;

/// Above this many units the primary action is a clearance sale.
const CLEARANCE_MIN_EXCLUSIVE: u32 = 5;

pub const CLEARANCE_SALE: &str = "Clearance Sale";
pub const BUNDLE_OFFER: &str = "Bundle Offer";
pub const TRANSFER_TO_ANOTHER_STORE: &str = "Transfer to another store";
pub const ONLINE_PROMOTION_CAMPAIGN: &str = "Online promotion campaign";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
  High,
  Medium,
  Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAction {
  pub id: u8,
  pub action: String,
  pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadInventoryEntry {
  #[serde(rename = "_id")]
  pub id: EntityId,
  pub name: String,
  #[serde(rename = "SKU")]
  pub sku: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub days_without_sale: i64,
  pub stock: u32,
  pub estimated_value: f64,
  pub suggested_actions: Vec<SuggestedAction>,
}

/// The fixed action menu for a dead item holding `quantity` units.
pub fn suggested_actions(quantity: u32) -> Vec<SuggestedAction> {
  let primary = if quantity > CLEARANCE_MIN_EXCLUSIVE {
    CLEARANCE_SALE
  } else {
    BUNDLE_OFFER
  };
  vec![
    SuggestedAction {
      id: 1,
      action: primary.to_string(),
      impact: Impact::High,
    },
    SuggestedAction {
      id: 2,
      action: TRANSFER_TO_ANOTHER_STORE.to_string(),
      impact: Impact::Medium,
    },
    SuggestedAction {
      id: 3,
      action: ONLINE_PROMOTION_CAMPAIGN.to_string(),
      impact: Impact::Low,
    },
  ]
}

/// Whole days between `last_sold` and `now`, truncated toward zero.
pub fn days_without_sale(last_sold: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
  (now - last_sold).num_days()
}

/// Evaluates a single product. `None` when it is unanalyzable or not dead.
pub fn analyze_product(product: &Product, now: DateTime<Utc>, threshold_days: i64) -> Option<DeadInventoryEntry> {
  let store = product.first_store()?;
  let last_sold = store.last_sold_date?;

  let days = days_without_sale(last_sold, now);
  if days < threshold_days || store.quantity == 0 {
    return None;
  }

  Some(DeadInventoryEntry {
    id: product.id.clone(),
    name: product.name.clone(),
    sku: product.sku.clone(),
    category: product.category.clone(),
    days_without_sale: days,
    stock: store.quantity,
    estimated_value: product.price * f64::from(store.quantity),
    suggested_actions: suggested_actions(store.quantity),
  })
}

/// Scans `products` in order and returns the dead items, preserving input order.
#[instrument(name = "analyzer::compute_dead_inventory", skip(products), fields(product_count = products.len()))]
pub fn compute_dead_inventory(products: &[Product], now: DateTime<Utc>, threshold_days: i64) -> Vec<DeadInventoryEntry> {
  let dead: Vec<DeadInventoryEntry> = products
    .iter()
    .filter_map(|product| analyze_product(product, now, threshold_days))
    .collect();
  debug!(dead = dead.len(), "Dead-inventory scan finished.");
  dead
}

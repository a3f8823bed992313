// stockroom/src/model/product.rs

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::id::EntityId;
use crate::error::{StockroomError, StockroomResult};

/// Store name given to the record synthesized for a newly created product.
pub const DEFAULT_STORE_NAME: &str = "Default Store";
/// Location given to the record synthesized for a newly created product.
pub const DEFAULT_STORE_LOCATION: &str = "Main Warehouse";

// 2024-01-01T00:00:00Z
const SENTINEL_LAST_SOLD_SECS: i64 = 1_704_067_200;

/// The `lastSoldDate` a stock record gets when none was ever recorded.
pub fn sentinel_last_sold_date() -> DateTime<Utc> {
  Utc.timestamp_opt(SENTINEL_LAST_SOLD_SECS, 0).single().unwrap_or_default()
}

fn default_last_sold_date() -> Option<DateTime<Utc>> {
  Some(sentinel_last_sold_date())
}

/// Reads `lastSoldDate` without failing the whole document.
///
/// `null` and unparseable values both come back as `None`, which makes the
/// owning product unanalyzable rather than unreadable.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
  let parsed = match &raw {
    None | Some(serde_json::Value::Null) => return Ok(None),
    Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(s)
      .map(|dt| dt.with_timezone(&Utc))
      .ok()
      .or_else(|| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
          .ok()
          .and_then(|d| d.and_hms_opt(0, 0, 0))
          .map(|naive| naive.and_utc())
      }),
    Some(serde_json::Value::Number(n)) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
    Some(_) => None,
  };
  if parsed.is_none() {
    warn!(value = ?raw, "Unreadable lastSoldDate on stock record; treating it as absent.");
  }
  Ok(parsed)
}

/// One store's on-hand quantity for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
  pub store_name: String,
  pub location: String,
  #[serde(default)]
  pub quantity: u32,
  #[serde(default = "default_last_sold_date", deserialize_with = "lenient_timestamp")]
  pub last_sold_date: Option<DateTime<Utc>>,
}

impl StockRecord {
  pub fn new(store_name: impl Into<String>, location: impl Into<String>, quantity: u32) -> Self {
    Self {
      store_name: store_name.into(),
      location: location.into(),
      quantity,
      last_sold_date: default_last_sold_date(),
    }
  }

  pub fn with_last_sold_date(mut self, last_sold_date: Option<DateTime<Utc>>) -> Self {
    self.last_sold_date = last_sold_date;
    self
  }

  fn validate(&self, position: usize) -> StockroomResult<()> {
    if self.store_name.trim().is_empty() {
      return Err(StockroomError::Validation(format!(
        "stores[{}].storeName is required",
        position
      )));
    }
    if self.location.trim().is_empty() {
      return Err(StockroomError::Validation(format!(
        "stores[{}].location is required",
        position
      )));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: EntityId,
  pub name: String,
  #[serde(rename = "SKU")]
  pub sku: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub price: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Order matters: dead-inventory analysis only reads the first record.
  #[serde(default)]
  pub stores: Vec<StockRecord>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Product {
  pub fn first_store(&self) -> Option<&StockRecord> {
    self.stores.first()
  }

  /// Units on hand across every store.
  pub fn total_stock(&self) -> u64 {
    self.stores.iter().map(|s| u64::from(s.quantity)).sum()
  }

  pub fn validate(&self) -> StockroomResult<()> {
    if self.name.trim().is_empty() {
      return Err(StockroomError::Validation("name is required".to_string()));
    }
    if self.sku.trim().is_empty() {
      return Err(StockroomError::Validation("SKU is required".to_string()));
    }
    if !self.price.is_finite() || self.price < 0.0 {
      return Err(StockroomError::Validation(format!(
        "price must be a non-negative number, got {}",
        self.price
      )));
    }
    for (position, store) in self.stores.iter().enumerate() {
      store.validate(position)?;
    }
    Ok(())
  }
}

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub sku: String,
  pub category: Option<String>,
  pub price: f64,
  pub description: Option<String>,
  pub initial_stock: u32,
}

impl NewProduct {
  /// Builds the stored product, with a single default stock record holding
  /// `initial_stock`.
  pub fn into_product(self, id: EntityId, now: DateTime<Utc>) -> StockroomResult<Product> {
    let product = Product {
      id,
      name: self.name.trim().to_string(),
      sku: self.sku.trim().to_string(),
      category: self.category,
      price: self.price,
      description: self.description,
      stores: vec![StockRecord::new(
        DEFAULT_STORE_NAME,
        DEFAULT_STORE_LOCATION,
        self.initial_stock,
      )],
      created_at: now,
      updated_at: now,
    };
    product.validate()?;
    Ok(product)
  }
}

/// Partial replacement of a product's fields. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
  pub name: Option<String>,
  #[serde(rename = "SKU")]
  pub sku: Option<String>,
  pub category: Option<String>,
  pub price: Option<f64>,
  pub description: Option<String>,
  pub stores: Option<Vec<StockRecord>>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.sku.is_none()
      && self.category.is_none()
      && self.price.is_none()
      && self.description.is_none()
      && self.stores.is_none()
  }

  /// Applies the patch to a copy of `current` and validates the result.
  pub fn apply_to(self, current: &Product, now: DateTime<Utc>) -> StockroomResult<Product> {
    let mut updated = current.clone();
    if let Some(name) = self.name {
      updated.name = name.trim().to_string();
    }
    if let Some(sku) = self.sku {
      updated.sku = sku.trim().to_string();
    }
    if let Some(category) = self.category {
      updated.category = Some(category);
    }
    if let Some(price) = self.price {
      updated.price = price;
    }
    if let Some(description) = self.description {
      updated.description = Some(description);
    }
    if let Some(stores) = self.stores {
      updated.stores = stores;
    }
    updated.validate()?;
    updated.updated_at = now;
    Ok(updated)
  }
}

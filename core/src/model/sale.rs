// stockroom/src/model/sale.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::EntityId;
use crate::error::{StockroomError, StockroomResult};

/// A recorded sale. Product and store are denormalized references: nothing
/// checks that they exist, and recording a sale leaves stock levels alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
  #[serde(rename = "_id")]
  pub id: EntityId,
  pub product_id: EntityId,
  pub product_name: String,
  pub store_id: EntityId,
  pub store_name: String,
  pub quantity: u32,
  pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
  pub product_id: EntityId,
  pub product_name: String,
  pub store_id: EntityId,
  pub store_name: String,
  pub quantity: u32,
  pub date: DateTime<Utc>,
}

impl NewSale {
  pub fn validate(&self) -> StockroomResult<()> {
    if self.product_name.trim().is_empty() {
      return Err(StockroomError::Validation("productName is required".to_string()));
    }
    if self.store_name.trim().is_empty() {
      return Err(StockroomError::Validation("storeName is required".to_string()));
    }
    if self.quantity == 0 {
      return Err(StockroomError::Validation("quantity must be positive".to_string()));
    }
    Ok(())
  }

  pub fn into_sale(self, id: EntityId) -> StockroomResult<Sale> {
    self.validate()?;
    Ok(Sale {
      id,
      product_id: self.product_id,
      product_name: self.product_name,
      store_id: self.store_id,
      store_name: self.store_name,
      quantity: self.quantity,
      date: self.date,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn new_sale_deserializes_mixed_identifier_shapes() {
    let sale: NewSale = serde_json::from_value(json!({
      "productId": "64f0c2",
      "productName": "Desk Lamp",
      "storeId": 3,
      "storeName": "Downtown",
      "quantity": 2,
      "date": "2025-03-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(sale.store_id.as_str(), "3");
    assert!(sale.validate().is_ok());
  }

  #[test]
  fn zero_quantity_is_rejected() {
    let sale: NewSale = serde_json::from_value(json!({
      "productId": "p", "productName": "Desk Lamp", "storeId": "s",
      "storeName": "Downtown", "quantity": 0, "date": "2025-03-01T10:00:00Z"
    }))
    .unwrap();
    assert!(matches!(sale.into_sale(EntityId::generate()), Err(StockroomError::Validation(_))));
  }
}

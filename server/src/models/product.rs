// stockroom_server/src/models/product.rs

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use stockroom::{EntityId, Product, StockRecord, StockroomError};

#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
  pub id: String,
  pub name: String,
  pub sku: String,
  pub category: Option<String>,
  pub price: f64,
  pub description: Option<String>,
  pub stores: Json<Vec<StockRecord>>, // Embedded documents, kept in store order
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
  type Error = StockroomError;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    Ok(Product {
      id: EntityId::parse(&row.id)?,
      name: row.name,
      sku: row.sku,
      category: row.category,
      price: row.price,
      description: row.description,
      stores: row.stores.0,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

// stockroom_server/src/models/sale.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use stockroom::{EntityId, Sale, StockroomError};

#[derive(Debug, Clone, FromRow)]
pub struct SaleRow {
  pub id: String,
  pub product_id: String,
  pub product_name: String,
  pub store_id: String,
  pub store_name: String,
  pub quantity: i32,
  pub date: DateTime<Utc>,
}

impl TryFrom<SaleRow> for Sale {
  type Error = StockroomError;

  fn try_from(row: SaleRow) -> Result<Self, Self::Error> {
    let quantity = u32::try_from(row.quantity)
      .map_err(|_| StockroomError::Validation(format!("sale {} has negative quantity {}", row.id, row.quantity)))?;
    Ok(Sale {
      id: EntityId::parse(&row.id)?,
      product_id: EntityId::parse(&row.product_id)?,
      product_name: row.product_name,
      store_id: EntityId::parse(&row.store_id)?,
      store_name: row.store_name,
      quantity,
      date: row.date,
    })
  }
}

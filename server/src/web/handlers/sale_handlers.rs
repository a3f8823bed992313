// stockroom_server/src/web/handlers/sale_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use stockroom::{EntityId, NewSale};

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
const LIST_FAILURE: &str = "Failed to fetch sales history.";
const CREATE_FAILURE: &str = "Failed to add sale.";

// --- Request DTO ---
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePayload {
  pub product_id: Option<EntityId>,
  pub product_name: Option<String>,
  pub store_id: Option<EntityId>,
  pub store_name: Option<String>,
  pub quantity: Option<u32>,
  pub date: Option<DateTime<Utc>>,
}

impl CreateSalePayload {
  /// Every field is required; a zero quantity counts as missing.
  pub fn into_new_sale(self) -> Result<NewSale, AppError> {
    let product_name = self.product_name.filter(|n| !n.trim().is_empty());
    let store_name = self.store_name.filter(|n| !n.trim().is_empty());
    let quantity = self.quantity.filter(|q| *q > 0);
    match (self.product_id, product_name, self.store_id, store_name, quantity, self.date) {
      (Some(product_id), Some(product_name), Some(store_id), Some(store_name), Some(quantity), Some(date)) => {
        Ok(NewSale {
          product_id,
          product_name,
          store_id,
          store_name,
          quantity,
          date,
        })
      }
      _ => Err(AppError::Validation(MISSING_REQUIRED_FIELDS.to_string())),
    }
  }
}

#[instrument(name = "handler::list_sales", skip(app_state))]
pub async fn list_sales_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let sales = app_state
    .inventory
    .list_sales()
    .await
    .map_err(AppError::fetch_failed(LIST_FAILURE))?;
  info!("Successfully fetched {} sales.", sales.len());
  Ok(HttpResponse::Ok().json(sales))
}

#[instrument(name = "handler::create_sale", skip(app_state, payload), fields(product_id = ?payload.product_id))]
pub async fn create_sale_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateSalePayload>,
) -> Result<HttpResponse, AppError> {
  let new_sale = payload.into_inner().into_new_sale()?;
  let sale = app_state
    .inventory
    .record_sale(new_sale)
    .await
    .map_err(AppError::storage_failed(CREATE_FAILURE))?;
  Ok(HttpResponse::Created().json(sale))
}

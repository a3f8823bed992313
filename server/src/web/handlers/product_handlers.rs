// stockroom_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use stockroom::{EntityId, NewProduct, ProductPatch};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
const LIST_FAILURE: &str = "Server error";

// --- Request DTO ---
#[derive(Deserialize, Debug, Default)]
pub struct CreateProductPayload {
  pub name: Option<String>,
  #[serde(rename = "SKU")]
  pub sku: Option<String>,
  pub category: Option<String>,
  pub price: Option<f64>,
  pub description: Option<String>,
  /// Units placed in the synthesized default store.
  pub stock: Option<u32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

impl CreateProductPayload {
  /// Everything except `description` must be present and non-blank.
  pub fn into_new_product(self) -> Result<NewProduct, AppError> {
    match (
      non_blank(self.name),
      non_blank(self.sku),
      non_blank(self.category),
      self.price,
      self.stock,
    ) {
      (Some(name), Some(sku), Some(category), Some(price), Some(stock)) => Ok(NewProduct {
        name,
        sku,
        category: Some(category),
        price,
        description: self.description,
        initial_stock: stock,
      }),
      _ => Err(AppError::Validation(ALL_FIELDS_REQUIRED.to_string())),
    }
  }
}

pub(crate) fn parse_id(raw: &str) -> Result<EntityId, AppError> {
  EntityId::parse(raw).map_err(AppError::from)
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state
    .inventory
    .list_products()
    .await
    .map_err(AppError::fetch_failed(LIST_FAILURE))?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_id(&path.into_inner())?;
  let product = app_state.inventory.get_product(&product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, payload), fields(sku = ?payload.sku))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let new_product = payload.into_inner().into_new_product()?;
  let product = app_state.inventory.create_product(new_product).await?;
  info!(product_id = %product.id, "Product {} created.", product.sku);
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, patch), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  patch: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_id(&path.into_inner())?;
  let product = app_state
    .inventory
    .update_product(&product_id, patch.into_inner())
    .await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_id(&path.into_inner())?;
  app_state.inventory.delete_product(&product_id).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Deleted successfully" })))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn payload_with_every_field_converts() {
    let payload: CreateProductPayload = serde_json::from_value(json!({
      "name": "Desk Lamp", "SKU": "DL-004", "category": "Home Goods", "price": 34.0, "stock": 0
    }))
    .unwrap();
    let new_product = payload.into_new_product().unwrap();
    assert_eq!(new_product.initial_stock, 0);
    assert_eq!(new_product.description, None);
  }

  #[test]
  fn blank_or_missing_fields_are_rejected() {
    let blank_category = CreateProductPayload {
      name: Some("Desk Lamp".into()),
      sku: Some("DL-004".into()),
      category: Some("  ".into()),
      price: Some(1.0),
      stock: Some(1),
      ..Default::default()
    };
    assert!(matches!(blank_category.into_new_product(), Err(AppError::Validation(ref m)) if m == ALL_FIELDS_REQUIRED));
    assert!(CreateProductPayload::default().into_new_product().is_err());
  }
}

// stockroom_server/src/web/handlers/dead_inventory_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

pub const DEAD_INVENTORY_FAILURE: &str = "Failed to fetch dead inventory";

/// Dead inventory as of now, using the configured threshold.
#[instrument(name = "handler::dead_inventory", skip(app_state), fields(threshold_days = app_state.inventory.threshold_days()))]
pub async fn dead_inventory_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let dead = app_state
    .inventory
    .dead_inventory(Utc::now())
    .await
    .map_err(AppError::fetch_failed(DEAD_INVENTORY_FAILURE))?;
  info!("Returning {} dead-inventory entries.", dead.len());
  Ok(HttpResponse::Ok().json(dead))
}

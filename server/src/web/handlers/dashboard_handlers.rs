// stockroom_server/src/web/handlers/dashboard_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

const SUMMARY_FAILURE: &str = "Failed to build dashboard summary";

#[instrument(name = "handler::dashboard_summary", skip(app_state))]
pub async fn dashboard_summary_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let summary = app_state
    .inventory
    .summary(Utc::now())
    .await
    .map_err(AppError::fetch_failed(SUMMARY_FAILURE))?;
  Ok(HttpResponse::Ok().json(summary))
}

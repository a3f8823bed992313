// stockroom_server/src/lib.rs

//! HTTP backend for Stockroom: actix-web routes over `stockroom::InventoryService`,
//! with Postgres or in-memory storage and a broadcast channel for change events.

pub mod config;
pub mod db;
pub mod errors;
pub mod events;
pub mod models;
pub mod state;
pub mod web;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use stockroom::{
  EventPublisher, InventoryService, MemoryProductRepository, MemorySaleRepository, ProductRepository,
  SaleRepository,
};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::state::AppState;

/// Picks the storage backend from the config and builds the application state.
pub async fn build_state(config: Arc<AppConfig>, events: Arc<dyn EventPublisher>) -> Result<AppState> {
  let (products, sales): (Arc<dyn ProductRepository>, Arc<dyn SaleRepository>) = match &config.database_url {
    Some(url) => {
      let pool = PgPoolOptions::new().connect(url).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to the database.");
        e
      })?;
      tracing::info!("Successfully connected to the database.");
      db::ensure_schema(&pool).await?;
      (
        Arc::new(db::PgProductRepository::new(pool.clone())),
        Arc::new(db::PgSaleRepository::new(pool)),
      )
    }
    None => {
      tracing::warn!("DATABASE_URL not set; using in-memory storage. Data is lost on restart.");
      (
        Arc::new(MemoryProductRepository::new()),
        Arc::new(MemorySaleRepository::new()),
      )
    }
  };

  let inventory = InventoryService::new(products, sales, events);
  Ok(AppState::new(inventory, config))
}

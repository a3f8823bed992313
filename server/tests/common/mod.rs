// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use tracing::Level;

use stockroom::{
  EntityId, InventoryService, MemoryProductRepository, MemorySaleRepository, NoopPublisher, Product,
  ProductRepository, StockRecord, StockroomResult,
};
use stockroom_server::config::AppConfig;
use stockroom_server::state::AppState;

pub fn default_config() -> Arc<AppConfig> {
  Arc::new(AppConfig::from_lookup(|_| None).unwrap())
}

pub fn state_with_products(products: Vec<Product>) -> AppState {
  let inventory = InventoryService::new(
    Arc::new(MemoryProductRepository::with_products(products)),
    Arc::new(MemorySaleRepository::new()),
    Arc::new(NoopPublisher),
  );
  AppState::new(inventory, default_config())
}

pub fn empty_state() -> AppState {
  state_with_products(Vec::new())
}

/// State whose product storage is down.
pub fn unreachable_state() -> AppState {
  let inventory = InventoryService::new(
    Arc::new(UnreachableProductRepository),
    Arc::new(MemorySaleRepository::new()),
    Arc::new(NoopPublisher),
  );
  AppState::new(inventory, default_config())
}

pub fn stale_product(sku: &str, price: f64, quantity: u32, idle_days: i64) -> Product {
  let now = Utc::now();
  let last_sold: DateTime<Utc> = now - Duration::days(idle_days) - Duration::hours(1);
  Product {
    id: EntityId::parse(&format!("id-{}", sku)).unwrap(),
    name: format!("Product {}", sku),
    sku: sku.to_string(),
    category: Some("General".to_string()),
    price,
    description: None,
    stores: vec![StockRecord::new("Default Store", "Main Warehouse", quantity).with_last_sold_date(Some(last_sold))],
    created_at: now,
    updated_at: now,
  }
}

pub struct UnreachableProductRepository;

#[async_trait]
impl ProductRepository for UnreachableProductRepository {
  async fn list(&self) -> StockroomResult<Vec<Product>> {
    Err(anyhow::anyhow!("connection refused").into())
  }
  async fn get(&self, _id: &EntityId) -> StockroomResult<Option<Product>> {
    Err(anyhow::anyhow!("connection refused").into())
  }
  async fn insert(&self, _product: Product) -> StockroomResult<Product> {
    Err(anyhow::anyhow!("connection refused").into())
  }
  async fn replace(&self, _product: Product) -> StockroomResult<Option<Product>> {
    Err(anyhow::anyhow!("connection refused").into())
  }
  async fn delete(&self, _id: &EntityId) -> StockroomResult<bool> {
    Err(anyhow::anyhow!("connection refused").into())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

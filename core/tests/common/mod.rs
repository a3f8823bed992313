// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use stockroom::{
  EntityId, EventPublisher, InventoryEvent, Product, ProductRepository, StockRecord, StockroomError,
  StockroomResult,
};
use tracing::Level;

// --- Time helpers ---
pub fn at(s: &str) -> DateTime<Utc> {
  DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
  now - Duration::days(days)
}

// --- Product fixtures ---
pub fn store(quantity: u32, last_sold: Option<DateTime<Utc>>) -> StockRecord {
  StockRecord::new("Default Store", "Main Warehouse", quantity).with_last_sold_date(last_sold)
}

pub fn product_with_stores(sku: &str, price: f64, stores: Vec<StockRecord>) -> Product {
  let created = at("2024-01-01T00:00:00Z");
  Product {
    id: EntityId::parse(&format!("id-{}", sku)).unwrap(),
    name: format!("Product {}", sku),
    sku: sku.to_string(),
    category: Some("General".to_string()),
    price,
    description: None,
    stores,
    created_at: created,
    updated_at: created,
  }
}

pub fn product(sku: &str, price: f64, quantity: u32, last_sold: DateTime<Utc>) -> Product {
  product_with_stores(sku, price, vec![store(quantity, Some(last_sold))])
}

pub fn skus<'a, I>(entries: I) -> Vec<String>
where
  I: IntoIterator<Item = &'a stockroom::DeadInventoryEntry>,
{
  entries.into_iter().map(|e| e.sku.clone()).collect()
}

// --- Collaborator doubles ---

/// A product repository whose every call fails, as if the database were down.
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
    Err(StockroomError::Repository {
      source: anyhow::anyhow!("connection refused"),
    })
  }
}

/// Keeps every published event for later assertions.
#[derive(Default)]
pub struct RecordingPublisher {
  pub events: Mutex<Vec<InventoryEvent>>,
}

impl RecordingPublisher {
  pub fn kinds(&self) -> Vec<&'static str> {
    self.events.lock().iter().map(InventoryEvent::kind).collect()
  }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
  async fn publish(&self, event: InventoryEvent) {
    self.events.lock().push(event);
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

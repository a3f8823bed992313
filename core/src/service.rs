// stockroom/src/service.rs

//! `InventoryService` ties the repositories, the event publisher and the
//! analyzers together. It is the only caller of the dead-inventory scan.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::analyzer::{compute_dead_inventory, DeadInventoryEntry, DEFAULT_THRESHOLD_DAYS};
use crate::error::{StockroomError, StockroomResult};
use crate::events::{EventPublisher, InventoryEvent, NoopPublisher};
use crate::model::{EntityId, NewProduct, NewSale, Product, ProductPatch, Sale};
use crate::repository::{MemoryProductRepository, MemorySaleRepository, ProductRepository, SaleRepository};
use crate::summary::{summarize, DashboardSummary, DEFAULT_LOW_STOCK_THRESHOLD};

#[derive(Clone)]
pub struct InventoryService {
  products: Arc<dyn ProductRepository>,
  sales: Arc<dyn SaleRepository>,
  events: Arc<dyn EventPublisher>,
  threshold_days: i64,
  low_stock_threshold: u64,
}

impl std::fmt::Debug for InventoryService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("InventoryService")
      .field("threshold_days", &self.threshold_days)
      .field("low_stock_threshold", &self.low_stock_threshold)
      .finish_non_exhaustive()
  }
}

impl InventoryService {
  pub fn new(
    products: Arc<dyn ProductRepository>,
    sales: Arc<dyn SaleRepository>,
    events: Arc<dyn EventPublisher>,
  ) -> Self {
    Self {
      products,
      sales,
      events,
      threshold_days: DEFAULT_THRESHOLD_DAYS,
      low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
    }
  }

  /// Service over fresh in-memory repositories with no event sink.
  pub fn in_memory() -> Self {
    Self::new(
      Arc::new(MemoryProductRepository::new()),
      Arc::new(MemorySaleRepository::new()),
      Arc::new(NoopPublisher),
    )
  }

  pub fn with_threshold_days(mut self, threshold_days: i64) -> Self {
    self.threshold_days = threshold_days;
    self
  }

  pub fn with_low_stock_threshold(mut self, low_stock_threshold: u64) -> Self {
    self.low_stock_threshold = low_stock_threshold;
    self
  }

  pub fn threshold_days(&self) -> i64 {
    self.threshold_days
  }

  #[instrument(name = "service::list_products", skip(self), err(Display))]
  pub async fn list_products(&self) -> StockroomResult<Vec<Product>> {
    self.products.list().await
  }

  #[instrument(name = "service::get_product", skip(self), fields(product_id = %id), err(Display))]
  pub async fn get_product(&self, id: &EntityId) -> StockroomResult<Product> {
    self
      .products
      .get(id)
      .await?
      .ok_or_else(|| StockroomError::product_not_found(id.as_str()))
  }

  #[instrument(name = "service::create_product", skip(self, new_product), fields(sku = %new_product.sku), err(Display))]
  pub async fn create_product(&self, new_product: NewProduct) -> StockroomResult<Product> {
    let product = new_product.into_product(EntityId::generate(), Utc::now())?;
    let stored = self.products.insert(product).await?;
    info!(product_id = %stored.id, "Product created.");
    self.events.publish(InventoryEvent::ProductCreated(stored.clone())).await;
    Ok(stored)
  }

  #[instrument(name = "service::update_product", skip(self, patch), fields(product_id = %id), err(Display))]
  pub async fn update_product(&self, id: &EntityId, patch: ProductPatch) -> StockroomResult<Product> {
    let current = self.get_product(id).await?;
    if patch.is_empty() {
      warn!("Empty update; returning product unchanged.");
      return Ok(current);
    }
    let updated = patch.apply_to(&current, Utc::now())?;
    // Deleted between the read and the write.
    let stored = self
      .products
      .replace(updated)
      .await?
      .ok_or_else(|| StockroomError::product_not_found(id.as_str()))?;
    info!("Product updated.");
    self.events.publish(InventoryEvent::ProductUpdated(stored.clone())).await;
    Ok(stored)
  }

  #[instrument(name = "service::delete_product", skip(self), fields(product_id = %id), err(Display))]
  pub async fn delete_product(&self, id: &EntityId) -> StockroomResult<()> {
    if !self.products.delete(id).await? {
      return Err(StockroomError::product_not_found(id.as_str()));
    }
    info!("Product deleted.");
    self.events.publish(InventoryEvent::ProductDeleted { id: id.clone() }).await;
    Ok(())
  }

  /// All sales, newest first.
  #[instrument(name = "service::list_sales", skip(self), err(Display))]
  pub async fn list_sales(&self) -> StockroomResult<Vec<Sale>> {
    let mut sales = self.sales.list().await?;
    sales.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(sales)
  }

  /// Stores a sale. Stock records are not touched: sales and stock levels
  /// are maintained independently.
  #[instrument(name = "service::record_sale", skip(self, new_sale), fields(product_id = %new_sale.product_id, quantity = new_sale.quantity), err(Display))]
  pub async fn record_sale(&self, new_sale: NewSale) -> StockroomResult<Sale> {
    let sale = new_sale.into_sale(EntityId::generate())?;
    let stored = self.sales.insert(sale).await?;
    info!(sale_id = %stored.id, "Sale recorded.");
    self.events.publish(InventoryEvent::SaleRecorded(stored.clone())).await;
    Ok(stored)
  }

  /// Loads the full product collection and runs the dead-inventory scan.
  /// A failed load is an error; products lacking data are silently skipped.
  #[instrument(name = "service::dead_inventory", skip(self), fields(threshold_days = self.threshold_days), err(Display))]
  pub async fn dead_inventory(&self, now: DateTime<Utc>) -> StockroomResult<Vec<DeadInventoryEntry>> {
    let products = self.products.list().await?;
    let dead = compute_dead_inventory(&products, now, self.threshold_days);
    info!(scanned = products.len(), dead = dead.len(), "Dead inventory computed.");
    Ok(dead)
  }

  #[instrument(name = "service::summary", skip(self), err(Display))]
  pub async fn summary(&self, now: DateTime<Utc>) -> StockroomResult<DashboardSummary> {
    let products = self.products.list().await?;
    let sales = self.sales.list().await?;
    Ok(summarize(
      &products,
      &sales,
      now,
      self.threshold_days,
      self.low_stock_threshold,
    ))
  }
}

// stockroom/src/repository/mod.rs

//! Storage seams. The service only ever talks to these traits, so the HTTP
//! layer can hand it Postgres in production and the in-memory stores in tests.

pub mod memory;

use async_trait::async_trait;

use crate::error::StockroomResult;
use crate::model::{EntityId, Product, Sale};

pub use memory::{MemoryProductRepository, MemorySaleRepository};

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Every product, in insertion order. No pagination: callers that analyze
  /// stock need the complete set.
  async fn list(&self) -> StockroomResult<Vec<Product>>;

  async fn get(&self, id: &EntityId) -> StockroomResult<Option<Product>>;

  /// Stores a new product. Fails with `DuplicateSku` if the SKU is taken.
  async fn insert(&self, product: Product) -> StockroomResult<Product>;

  /// Overwrites the product with the same id. `Ok(None)` if there is none.
  /// Fails with `DuplicateSku` if the new SKU belongs to another product.
  async fn replace(&self, product: Product) -> StockroomResult<Option<Product>>;

  /// Removes a product, returning whether it existed.
  async fn delete(&self, id: &EntityId) -> StockroomResult<bool>;
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
  async fn list(&self) -> StockroomResult<Vec<Sale>>;

  async fn insert(&self, sale: Sale) -> StockroomResult<Sale>;
}

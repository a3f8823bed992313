// stockroom/src/repository/memory.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{event, Level};

use super::{ProductRepository, SaleRepository};
use crate::error::{StockroomError, StockroomResult};
use crate::model::{EntityId, Product, Sale};

/// Insertion-ordered product store behind a `parking_lot::RwLock`.
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
  products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: Vec<Product>) -> Self {
    Self {
      products: RwLock::new(products),
    }
  }
}

fn sku_taken(products: &[Product], sku: &str, except: Option<&EntityId>) -> bool {
  products
    .iter()
    .any(|p| p.sku == sku && Some(&p.id) != except)
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
  async fn list(&self) -> StockroomResult<Vec<Product>> {
    Ok(self.products.read().clone())
  }

  async fn get(&self, id: &EntityId) -> StockroomResult<Option<Product>> {
    Ok(self.products.read().iter().find(|p| &p.id == id).cloned())
  }

  async fn insert(&self, product: Product) -> StockroomResult<Product> {
    let mut guard = self.products.write();
    if sku_taken(&guard, &product.sku, None) {
      event!(Level::DEBUG, sku = %product.sku, "Rejecting insert with duplicate SKU.");
      return Err(StockroomError::DuplicateSku { sku: product.sku });
    }
    guard.push(product.clone());
    Ok(product)
  }

  async fn replace(&self, product: Product) -> StockroomResult<Option<Product>> {
    let mut guard = self.products.write();
    if sku_taken(&guard, &product.sku, Some(&product.id)) {
      return Err(StockroomError::DuplicateSku { sku: product.sku });
    }
    match guard.iter_mut().find(|p| p.id == product.id) {
      Some(slot) => {
        *slot = product.clone();
        Ok(Some(product))
      }
      None => Ok(None),
    }
  }

  async fn delete(&self, id: &EntityId) -> StockroomResult<bool> {
    let mut guard = self.products.write();
    let before = guard.len();
    guard.retain(|p| &p.id != id);
    Ok(guard.len() != before)
  }
}

#[derive(Debug, Default)]
pub struct MemorySaleRepository {
  sales: RwLock<Vec<Sale>>,
}

impl MemorySaleRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl SaleRepository for MemorySaleRepository {
  async fn list(&self) -> StockroomResult<Vec<Sale>> {
    Ok(self.sales.read().clone())
  }

  async fn insert(&self, sale: Sale) -> StockroomResult<Sale> {
    self.sales.write().push(sale.clone());
    Ok(sale)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::NewProduct;
  use chrono::Utc;

  fn product(sku: &str) -> Product {
    NewProduct {
      name: format!("Item {}", sku),
      sku: sku.to_string(),
      category: None,
      price: 1.0,
      description: None,
      initial_stock: 1,
    }
    .into_product(EntityId::generate(), Utc::now())
    .unwrap()
  }

  #[tokio::test]
  async fn insert_rejects_duplicate_sku() {
    let repo = MemoryProductRepository::new();
    repo.insert(product("A-1")).await.unwrap();
    let err = repo.insert(product("A-1")).await.unwrap_err();
    assert!(matches!(err, StockroomError::DuplicateSku { ref sku } if sku == "A-1"));
    assert_eq!(repo.list().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn replace_keeps_position_and_checks_other_skus() {
    let repo = MemoryProductRepository::new();
    let a = repo.insert(product("A")).await.unwrap();
    let b = repo.insert(product("B")).await.unwrap();

    let mut renamed = a.clone();
    renamed.name = "Renamed".into();
    assert!(repo.replace(renamed).await.unwrap().is_some());

    let mut clash = b.clone();
    clash.sku = "A".into();
    assert!(matches!(repo.replace(clash).await, Err(StockroomError::DuplicateSku { .. })));

    let listed = repo.list().await.unwrap();
    assert_eq!(listed[0].name, "Renamed");
    assert_eq!(listed[1].id, b.id);
  }

  #[tokio::test]
  async fn replace_and_delete_of_unknown_ids() {
    let repo = MemoryProductRepository::new();
    assert!(repo.replace(product("X")).await.unwrap().is_none());
    assert!(!repo.delete(&EntityId::generate()).await.unwrap());
  }
}

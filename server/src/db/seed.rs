// stockroom_server/src/db/seed.rs

use stockroom::{InventoryService, NewProduct, StockroomError, StockroomResult};
use tracing::{info, instrument};

/// (name, SKU, category, description, price, stock)
const DEMO_PRODUCTS: &[(&str, &str, &str, &str, f64, u32)] = &[
  ("Wireless Headphones", "WH-001", "Electronics", "Noise cancelling wireless headphones", 89.99, 15),
  ("Cotton T-Shirt", "CT-002", "Apparel", "Plain white cotton t-shirt", 12.5, 8),
  ("Ceramic Mug", "CM-003", "Kitchenware", "12oz ceramic coffee mug", 7.25, 3),
  ("Desk Lamp", "DL-004", "Home Goods", "Adjustable LED desk lamp", 34.0, 12),
  ("Protein Powder", "PP-005", "Health", "Whey protein isolate", 45.0, 6),
];

/// Creates the demo catalogue through the service. Products whose SKU is
/// already present are skipped, so seeding twice is harmless.
/// Returns how many products were created.
#[instrument(name = "db::seed_demo_products", skip(service), err(Display))]
pub async fn seed_demo_products(service: &InventoryService) -> StockroomResult<usize> {
  let mut created = 0;
  for &(name, sku, category, description, price, stock) in DEMO_PRODUCTS {
    let new_product = NewProduct {
      name: name.to_string(),
      sku: sku.to_string(),
      category: Some(category.to_string()),
      price,
      description: Some(description.to_string()),
      initial_stock: stock,
    };
    match service.create_product(new_product).await {
      Ok(_) => created += 1,
      Err(StockroomError::DuplicateSku { .. }) => info!(sku, "Demo product already present; skipping."),
      Err(e) => return Err(e),
    }
  }
  info!(created, "Demo products seeded.");
  Ok(created)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn seeding_is_idempotent() {
    let service = InventoryService::in_memory();
    assert_eq!(seed_demo_products(&service).await.unwrap(), DEMO_PRODUCTS.len());
    assert_eq!(seed_demo_products(&service).await.unwrap(), 0);
    assert_eq!(service.list_products().await.unwrap().len(), DEMO_PRODUCTS.len());
  }
}

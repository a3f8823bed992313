// stockroom_server/src/db/postgres.rs

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{error, info, instrument};

use crate::models::{ProductRow, SaleRow, PRODUCT_COLUMNS, SALE_COLUMNS};
use stockroom::{EntityId, Product, ProductRepository, Sale, SaleRepository, StockroomError, StockroomResult};

const SCHEMA: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS products (
    seq         BIGSERIAL,
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    sku         TEXT NOT NULL,
    category    TEXT,
    price       DOUBLE PRECISION NOT NULL CHECK (price >= 0),
    description TEXT,
    stores      JSONB NOT NULL DEFAULT '[]'::jsonb,
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL
  )
  "#,
  "CREATE UNIQUE INDEX IF NOT EXISTS products_sku_key ON products (sku)",
  r#"
  CREATE TABLE IF NOT EXISTS sales (
    id           TEXT PRIMARY KEY,
    product_id   TEXT NOT NULL,
    product_name TEXT NOT NULL,
    store_id     TEXT NOT NULL,
    store_name   TEXT NOT NULL,
    quantity     INTEGER NOT NULL CHECK (quantity > 0),
    date         TIMESTAMPTZ NOT NULL
  )
  "#,
  "CREATE INDEX IF NOT EXISTS sales_date_idx ON sales (date DESC)",
];

/// Creates the tables and indexes if they do not exist yet.
#[instrument(name = "db::ensure_schema", skip(pool), err(Display))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
  for statement in SCHEMA {
    sqlx::query(statement).execute(pool).await?;
  }
  info!("Database schema is in place.");
  Ok(())
}

fn repository_error(e: sqlx::Error) -> StockroomError {
  StockroomError::Repository { source: e.into() }
}

/// Maps a unique-index violation on `sku` to `DuplicateSku`.
fn write_error(e: sqlx::Error, sku: &str) -> StockroomError {
  if let sqlx::Error::Database(db_err) = &e {
    if db_err.is_unique_violation() && db_err.constraint() == Some("products_sku_key") {
      return StockroomError::DuplicateSku { sku: sku.to_string() };
    }
  }
  error!(error = %e, "Product write failed.");
  repository_error(e)
}

#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  async fn list(&self) -> StockroomResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products ORDER BY seq ASC", PRODUCT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch products from database: {}", e);
        repository_error(e)
      })?;
    rows.into_iter().map(Product::try_from).collect()
  }

  async fn get(&self, id: &EntityId) -> StockroomResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
      .bind(id.as_str())
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while fetching product {}: {}", id, e);
        repository_error(e)
      })?;
    row.map(Product::try_from).transpose()
  }

  async fn insert(&self, product: Product) -> StockroomResult<Product> {
    let row: ProductRow = sqlx::query_as(&format!(
      "INSERT INTO products (id, name, sku, category, price, description, stores, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(product.id.as_str())
    .bind(&product.name)
    .bind(&product.sku)
    .bind(&product.category)
    .bind(product.price)
    .bind(&product.description)
    .bind(Json(&product.stores))
    .bind(product.created_at)
    .bind(product.updated_at)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| write_error(e, &product.sku))?;
    Product::try_from(row)
  }

  async fn replace(&self, product: Product) -> StockroomResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!(
      "UPDATE products SET name = $2, sku = $3, category = $4, price = $5, description = $6, stores = $7, \
       updated_at = $8 WHERE id = $1 RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(product.id.as_str())
    .bind(&product.name)
    .bind(&product.sku)
    .bind(&product.category)
    .bind(product.price)
    .bind(&product.description)
    .bind(Json(&product.stores))
    .bind(product.updated_at)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| write_error(e, &product.sku))?;
    row.map(Product::try_from).transpose()
  }

  async fn delete(&self, id: &EntityId) -> StockroomResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id.as_str())
      .execute(&self.pool)
      .await
      .map_err(repository_error)?;
    Ok(result.rows_affected() > 0)
  }
}

#[derive(Debug, Clone)]
pub struct PgSaleRepository {
  pool: PgPool,
}

impl PgSaleRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl SaleRepository for PgSaleRepository {
  async fn list(&self) -> StockroomResult<Vec<Sale>> {
    let rows: Vec<SaleRow> = sqlx::query_as(&format!("SELECT {} FROM sales ORDER BY date DESC", SALE_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch sales from database: {}", e);
        repository_error(e)
      })?;
    rows.into_iter().map(Sale::try_from).collect()
  }

  async fn insert(&self, sale: Sale) -> StockroomResult<Sale> {
    let quantity = i32::try_from(sale.quantity)
      .map_err(|_| StockroomError::Validation(format!("quantity {} is too large", sale.quantity)))?;
    let row: SaleRow = sqlx::query_as(&format!(
      "INSERT INTO sales (id, product_id, product_name, store_id, store_name, quantity, date) \
       VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
      SALE_COLUMNS
    ))
    .bind(sale.id.as_str())
    .bind(sale.product_id.as_str())
    .bind(&sale.product_name)
    .bind(sale.store_id.as_str())
    .bind(&sale.store_name)
    .bind(quantity)
    .bind(sale.date)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to insert sale {}: {}", sale.id, e);
      repository_error(e)
    })?;
    Sale::try_from(row)
  }
}

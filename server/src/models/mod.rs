// stockroom_server/src/models/mod.rs

//! Row types for the Postgres tables, and their conversion into domain types.

pub mod product;
pub mod sale;

pub use product::ProductRow;
pub use sale::SaleRow;

/// Column list shared by every product query.
pub const PRODUCT_COLUMNS: &str = "id, name, sku, category, price, description, stores, created_at, updated_at";

/// Column list shared by every sale query.
pub const SALE_COLUMNS: &str = "id, product_id, product_name, store_id, store_name, quantity, date";

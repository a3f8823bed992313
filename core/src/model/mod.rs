// stockroom/src/model/mod.rs

//! Products, their per-store stock records, and sales.

pub mod id;
pub mod product;
pub mod sale;

pub use id::EntityId;
pub use product::{
  sentinel_last_sold_date, NewProduct, Product, ProductPatch, StockRecord, DEFAULT_STORE_LOCATION,
  DEFAULT_STORE_NAME,
};
pub use sale::{NewSale, Sale};

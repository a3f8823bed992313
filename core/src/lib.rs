// src/lib.rs

//! Stockroom: inventory domain model and dead-inventory analysis.
//!
//! The crate provides:
//!  - Products with ordered per-store stock records, and sales.
//!  - The dead-inventory scan over each product's first stock record.
//!  - Dashboard aggregates (stock totals, low-stock counts, monthly sales).
//!  - Repository and event-publisher traits, with in-memory implementations.
//!  - `InventoryService`, which wires those together for an HTTP layer.

pub mod analyzer;
pub mod error;
pub mod events;
pub mod model;
pub mod repository;
pub mod service;
pub mod summary;

// --- Re-exports for the Public API ---

pub use crate::analyzer::{compute_dead_inventory, DeadInventoryEntry, Impact, SuggestedAction, DEFAULT_THRESHOLD_DAYS};
pub use crate::error::{StockroomError, StockroomResult};
pub use crate::events::{EventPublisher, InventoryEvent, NoopPublisher};
pub use crate::model::{EntityId, NewProduct, NewSale, Product, ProductPatch, Sale, StockRecord};
pub use crate::repository::{MemoryProductRepository, MemorySaleRepository, ProductRepository, SaleRepository};
pub use crate::service::InventoryService;
pub use crate::summary::{summarize, DashboardSummary, DEFAULT_LOW_STOCK_THRESHOLD};

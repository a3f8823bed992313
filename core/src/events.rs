// stockroom/src/events.rs

//! Change notifications emitted by the service after each successful write.
//! Nothing in the domain consumes them; they exist for live dashboards.

use async_trait::async_trait;
use serde::Serialize;

use crate::model::{EntityId, Product, Sale};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum InventoryEvent {
  ProductCreated(Product),
  ProductUpdated(Product),
  ProductDeleted { id: EntityId },
  SaleRecorded(Sale),
}

impl InventoryEvent {
  pub fn kind(&self) -> &'static str {
    match self {
      InventoryEvent::ProductCreated(_) => "productCreated",
      InventoryEvent::ProductUpdated(_) => "productUpdated",
      InventoryEvent::ProductDeleted { .. } => "productDeleted",
      InventoryEvent::SaleRecorded(_) => "saleRecorded",
    }
  }
}

/// Fire-and-forget sink for [`InventoryEvent`]s. Publishing must not fail
/// the write that triggered it.
#[async_trait]
pub trait EventPublisher: Send + Sync {
  async fn publish(&self, event: InventoryEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

#[async_trait]
impl EventPublisher for NoopPublisher {
  async fn publish(&self, _event: InventoryEvent) {}
}

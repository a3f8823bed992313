// stockroom_server/src/events.rs

//! Broadcast channel for inventory change events.
//!
//! Every successful write is fanned out to subscribers. With nobody
//! listening the event is dropped; publishing never blocks a request.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use stockroom::{EventPublisher, InventoryEvent};

#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
  sender: broadcast::Sender<InventoryEvent>,
}

impl BroadcastPublisher {
  pub fn new(capacity: usize) -> Self {
    let (sender, _) = broadcast::channel(capacity);
    Self { sender }
  }

  pub fn subscribe(&self) -> broadcast::Receiver<InventoryEvent> {
    self.sender.subscribe()
  }
}

#[async_trait]
impl EventPublisher for BroadcastPublisher {
  async fn publish(&self, event: InventoryEvent) {
    let kind = event.kind();
    match self.sender.send(event) {
      Ok(receivers) => trace!(kind, receivers, "Inventory event broadcast."),
      Err(_) => trace!(kind, "No subscribers; inventory event dropped."),
    }
  }
}

/// Logs every event seen on `receiver` until the channel closes.
pub fn spawn_event_logger(mut receiver: broadcast::Receiver<InventoryEvent>) -> JoinHandle<()> {
  tokio::spawn(async move {
    loop {
      match receiver.recv().await {
        Ok(event) => {
          info!(kind = event.kind(), "Inventory event");
          debug!(payload = %serde_json::to_string(&event).unwrap_or_default(), "Inventory event payload");
        }
        Err(broadcast::error::RecvError::Lagged(skipped)) => {
          warn!(skipped, "Event logger fell behind; events skipped.");
        }
        Err(broadcast::error::RecvError::Closed) => {
          info!("Event channel closed; logger exiting.");
          break;
        }
      }
    }
  })
}

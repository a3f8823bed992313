// stockroom_server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use stockroom::InventoryService;

#[derive(Clone, Debug)]
pub struct AppState {
  pub inventory: InventoryService,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Applies the configured thresholds to `inventory`.
  pub fn new(inventory: InventoryService, config: Arc<AppConfig>) -> Self {
    let inventory = inventory
      .with_threshold_days(config.dead_inventory_threshold_days)
      .with_low_stock_threshold(config.low_stock_threshold);
    Self { inventory, config }
  }
}

// stockroom_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Postgres connection string. Without one the server keeps everything in memory.
  pub database_url: Option<String>,

  pub dead_inventory_threshold_days: i64,
  pub low_stock_threshold: u64,

  // Capacity of the broadcast channel carrying inventory change events
  pub event_channel_capacity: usize,

  // Optional: for seeding demo products on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables take defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    fn parsed<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
    where
      T: FromStr,
      T::Err: std::fmt::Display,
      F: Fn(&str) -> Option<String>,
    {
      match lookup(name) {
        Some(raw) => raw
          .trim()
          .parse::<T>()
          .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", name, raw, e))),
        None => Ok(default),
      }
    }

    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parsed(&lookup, "SERVER_PORT", 5000u16)?;
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

    let dead_inventory_threshold_days = parsed(
      &lookup,
      "DEAD_INVENTORY_THRESHOLD_DAYS",
      stockroom::DEFAULT_THRESHOLD_DAYS,
    )?;
    if dead_inventory_threshold_days < 0 {
      return Err(AppError::Config(
        "DEAD_INVENTORY_THRESHOLD_DAYS cannot be negative".to_string(),
      ));
    }
    let low_stock_threshold = parsed(&lookup, "LOW_STOCK_THRESHOLD", stockroom::DEFAULT_LOW_STOCK_THRESHOLD)?;

    let event_channel_capacity = parsed(&lookup, "EVENT_CHANNEL_CAPACITY", 64usize)?;
    if event_channel_capacity == 0 {
      return Err(AppError::Config("EVENT_CHANNEL_CAPACITY must be at least 1".to_string()));
    }

    let seed_db = parsed(&lookup, "SEED_DB", false)?;

    tracing::info!("Application configuration loaded successfully.");
    // The database URL may carry credentials; only log whether one is set.
    tracing::debug!(
      server_host = %server_host,
      server_port,
      database_configured = database_url.is_some(),
      dead_inventory_threshold_days,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      dead_inventory_threshold_days,
      low_stock_threshold,
      event_channel_capacity,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

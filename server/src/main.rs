// stockroom_server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use stockroom_server::config::AppConfig;
use stockroom_server::events::{spawn_event_logger, BroadcastPublisher};
use stockroom_server::{build_state, db, web};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting Stockroom server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let publisher = BroadcastPublisher::new(app_config.event_channel_capacity);
  let _event_logger = spawn_event_logger(publisher.subscribe());

  let app_state = match build_state(app_config.clone(), Arc::new(publisher)).await {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialize storage.");
      return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }
  };

  if app_config.seed_db {
    if let Err(e) = db::seed_demo_products(&app_state.inventory).await {
      tracing::error!(error = %e, "Failed to seed database.");
    }
  }

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

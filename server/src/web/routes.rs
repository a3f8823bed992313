// stockroom_server/src/web/routes.rs

use actix_web::{error::InternalError, web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{dashboard_handlers, dead_inventory_handlers, product_handlers, sale_handlers};

async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().body("Backend is running!")
}

// Does not touch storage; it only says the process is serving requests.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as every other 400.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    let message = err.to_string();
    let response = actix_web::ResponseError::error_response(&AppError::Validation(message));
    InternalError::from_response(err, response).into()
  })
}

// Called from `main.rs` and the integration tests to mount every service.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config());
  cfg.route("/", web::get().to(root_handler));
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
          .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
          .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
      )
      .route(
        "/dead-inventory",
        web::get().to(dead_inventory_handlers::dead_inventory_handler),
      )
      .service(
        web::scope("/sales")
          .route("", web::get().to(sale_handlers::list_sales_handler))
          .route("", web::post().to(sale_handlers::create_sale_handler)),
      )
      .route(
        "/dashboard/summary",
        web::get().to(dashboard_handlers::dashboard_summary_handler),
      ),
  );
}

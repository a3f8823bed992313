// stockroom_server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use stockroom::StockroomError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  /// Data could not be read or written. `context` is the message the client sees.
  #[error("{context}: {source}")]
  Retrieval {
    context: &'static str,
    #[source]
    source: StockroomError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl AppError {
  /// For read endpoints: any failure becomes a 500 carrying `context`.
  pub fn fetch_failed(context: &'static str) -> impl FnOnce(StockroomError) -> AppError {
    move |source| AppError::Retrieval { context, source }
  }

  /// For write endpoints: client mistakes keep their own status, storage
  /// failures become a 500 carrying `context`.
  pub fn storage_failed(context: &'static str) -> impl FnOnce(StockroomError) -> AppError {
    move |source| match source {
      StockroomError::Repository { .. } => AppError::Retrieval { context, source },
      other => AppError::from(other),
    }
  }
}

impl From<StockroomError> for AppError {
  fn from(err: StockroomError) -> Self {
    match err {
      StockroomError::Validation(m) | StockroomError::InvalidIdentifier(m) => AppError::Validation(m),
      StockroomError::NotFound { entity, id } => {
        tracing::debug!(entity, id = %id, "Entity lookup missed.");
        AppError::NotFound(format!("{} not found", entity))
      }
      StockroomError::DuplicateSku { sku } => AppError::Conflict(format!("A product with SKU '{}' already exists", sku)),
      source @ StockroomError::Repository { .. } => AppError::Retrieval {
        context: "Server error",
        source,
      },
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience in handlers
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<StockroomError>() {
      Ok(inner) => AppError::from(inner),
      Err(err) => match err.downcast::<sqlx::Error>() {
        Ok(db_err) => AppError::Sqlx(db_err),
        Err(err) => AppError::Internal(err.to_string()),
      },
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Conflict(_) => StatusCode::CONFLICT,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Retrieval { .. } | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Validation(_) | AppError::NotFound(_) | AppError::Conflict(_) => {
        tracing::warn!(application_error = %self, "Responding with client error");
      }
      _ => tracing::error!(application_error = %self, "Responding with error"),
    }
    let body = match self {
      AppError::Validation(m) | AppError::NotFound(m) | AppError::Conflict(m) => json!({ "error": m }),
      AppError::Config(m) => json!({ "error": "Configuration issue", "detail": m }),
      AppError::Sqlx(_) => json!({ "error": "Database operation failed" }),
      AppError::Retrieval { context, source } => {
        tracing::error!(source = ?source, "Storage failure details");
        json!({ "error": context })
      }
      AppError::Internal(_) => json!({ "error": "An internal error occurred" }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn domain_errors_map_to_http_statuses() {
    let cases = [
      (StockroomError::Validation("x".into()), StatusCode::BAD_REQUEST),
      (StockroomError::InvalidIdentifier("x".into()), StatusCode::BAD_REQUEST),
      (StockroomError::product_not_found("p1"), StatusCode::NOT_FOUND),
      (StockroomError::DuplicateSku { sku: "A".into() }, StatusCode::CONFLICT),
      (
        StockroomError::Repository {
          source: anyhow::anyhow!("down"),
        },
        StatusCode::INTERNAL_SERVER_ERROR,
      ),
    ];
    for (err, status) in cases {
      assert_eq!(AppError::from(err).status_code(), status);
    }
  }

  #[test]
  fn not_found_message_names_the_entity_only() {
    let err = AppError::from(StockroomError::product_not_found("abc"));
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Product not found"));
  }

  #[test]
  fn fetch_failed_hides_every_cause() {
    let err = AppError::fetch_failed("Failed to fetch dead inventory")(StockroomError::Validation("odd".into()));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(err, AppError::Retrieval { context, .. } if context == "Failed to fetch dead inventory"));
  }

  #[test]
  fn storage_failed_keeps_client_errors() {
    let client = AppError::storage_failed("Failed to add sale.")(StockroomError::Validation("quantity".into()));
    assert_eq!(client.status_code(), StatusCode::BAD_REQUEST);
    let storage = AppError::storage_failed("Failed to add sale.")(StockroomError::Repository {
      source: anyhow::anyhow!("disk full"),
    });
    assert!(matches!(storage, AppError::Retrieval { context, .. } if context == "Failed to add sale."));
  }
}

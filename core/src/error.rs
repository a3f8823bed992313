// stockroom/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockroomError {
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("Invalid identifier: {0}")]
  InvalidIdentifier(String),

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("A product with SKU '{sku}' already exists")]
  DuplicateSku { sku: String },

  /// The backing store could not be read or written.
  #[error("Repository operation failed. Source: {source}")]
  Repository {
    #[source]
    source: AnyhowError,
  },
}

impl StockroomError {
  pub fn product_not_found(id: impl Into<String>) -> Self {
    StockroomError::NotFound {
      entity: "Product",
      id: id.into(),
    }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, StockroomError::NotFound { .. })
  }
}

// Repository implementations bubble their driver errors up through anyhow.
impl From<AnyhowError> for StockroomError {
  fn from(err: AnyhowError) -> Self {
    // Don't double-wrap a StockroomError that travelled through anyhow.
    match err.downcast::<StockroomError>() {
      Ok(inner) => inner,
      Err(err) => StockroomError::Repository { source: err },
    }
  }
}

pub type StockroomResult<T, E = StockroomError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anyhow_wrapping_a_stockroom_error_is_unwrapped() {
    let wrapped = anyhow::Error::new(StockroomError::DuplicateSku { sku: "MUG-1".into() });
    match StockroomError::from(wrapped) {
      StockroomError::DuplicateSku { sku } => assert_eq!(sku, "MUG-1"),
      other => panic!("Expected DuplicateSku, got {:?}", other),
    }
  }

  #[test]
  fn foreign_errors_become_repository_failures() {
    let err = StockroomError::from(anyhow::anyhow!("connection reset"));
    assert!(matches!(err, StockroomError::Repository { .. }));
    assert!(err.to_string().contains("connection reset"));
  }
}

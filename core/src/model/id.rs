// stockroom/src/model/id.rs

//! String identifiers for products, sales and the stores a sale references.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{StockroomError, StockroomResult};

/// Longest identifier accepted at the boundary.
pub const MAX_ID_LEN: usize = 128;

/// An opaque identifier.
///
/// Any non-empty string of at most [`MAX_ID_LEN`] characters with no
/// whitespace or control characters is accepted. Surrounding whitespace is
/// trimmed before validation. Ids minted by this crate are simple UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
  pub fn parse(raw: &str) -> StockroomResult<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(StockroomError::InvalidIdentifier("identifier cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_ID_LEN {
      return Err(StockroomError::InvalidIdentifier(format!(
        "identifier exceeds {} characters",
        MAX_ID_LEN
      )));
    }
    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
      return Err(StockroomError::InvalidIdentifier(format!(
        "identifier '{}' contains whitespace or control characters",
        trimmed.escape_debug()
      )));
    }
    Ok(EntityId(trimmed.to_string()))
  }

  /// Mints a fresh identifier.
  pub fn generate() -> Self {
    EntityId(uuid::Uuid::new_v4().simple().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for EntityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for EntityId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// Numbers are accepted too: some clients send numeric store ids.
impl<'de> Deserialize<'de> for EntityId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Text(String),
      Number(serde_json::Number),
    }

    let raw = match Raw::deserialize(deserializer)? {
      Raw::Text(s) => s,
      Raw::Number(n) => n.to_string(),
    };
    EntityId::parse(&raw).map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_trims_and_accepts_plain_ids() {
    let id = EntityId::parse("  store-42 ").unwrap();
    assert_eq!(id.as_str(), "store-42");
  }

  #[test]
  fn parse_rejects_empty_and_embedded_whitespace() {
    assert!(matches!(EntityId::parse("   "), Err(StockroomError::InvalidIdentifier(_))));
    assert!(matches!(EntityId::parse("a b"), Err(StockroomError::InvalidIdentifier(_))));
    assert!(matches!(EntityId::parse("a\u{0007}"), Err(StockroomError::InvalidIdentifier(_))));
  }

  #[test]
  fn parse_rejects_overlong_ids() {
    let long = "x".repeat(MAX_ID_LEN + 1);
    assert!(EntityId::parse(&long).is_err());
    assert!(EntityId::parse(&"x".repeat(MAX_ID_LEN)).is_ok());
  }

  #[test]
  fn deserializes_from_numbers_and_strings() {
    let from_num: EntityId = serde_json::from_str("17").unwrap();
    let from_str: EntityId = serde_json::from_str("\"p-17\"").unwrap();
    assert_eq!(from_num.as_str(), "17");
    assert_eq!(from_str.as_str(), "p-17");
    assert!(serde_json::from_str::<EntityId>("\"\"").is_err());
  }

  #[test]
  fn generated_ids_are_valid_and_distinct() {
    let a = EntityId::generate();
    let b = EntityId::generate();
    assert_ne!(a, b);
    assert!(EntityId::parse(a.as_str()).is_ok());
  }
}

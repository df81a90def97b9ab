//! Inventory configuration

use crate::error::{InventoryError, InventoryResult};
use crate::inventory::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Inventory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots (distinct item types)
    pub capacity: usize,

    /// Refuse to grow non-stackable stacks past one unit in checked adds
    pub enforce_stackable: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            enforce_stackable: true,
        }
    }
}

impl InventoryConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> InventoryResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| InventoryError::Config(e.to_string()))?;
        log::debug!(
            "Loaded inventory config: capacity {}, enforce_stackable {}",
            config.capacity,
            config.enforce_stackable
        );
        Ok(config)
    }

    /// Set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set stackability enforcement
    pub fn with_enforce_stackable(mut self, enforce: bool) -> Self {
        self.enforce_stackable = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InventoryConfig::default();
        assert_eq!(config.capacity, 10);
        assert!(config.enforce_stackable);
    }

    #[test]
    fn test_from_json() {
        let config = InventoryConfig::from_json_str(r#"{ "capacity": 27 }"#).unwrap();
        assert_eq!(config.capacity, 27);
        assert!(config.enforce_stackable);

        let config =
            InventoryConfig::from_json_str(r#"{ "enforce_stackable": false }"#).unwrap();
        assert_eq!(config, InventoryConfig::default().with_enforce_stackable(false));
    }

    #[test]
    fn test_invalid_json() {
        let err = InventoryConfig::from_json_str(r#"{ "capacity": -1 }"#).unwrap_err();
        assert!(matches!(err, InventoryError::Config(_)));

        assert!(InventoryConfig::from_json_str("not json").is_err());
    }
}

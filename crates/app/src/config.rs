//! Session configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the session persists its state and how it reports.
///
/// Every key is optional when deserializing; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub inventory_name: String,
    pub products_path: PathBuf,
    pub orders_path: PathBuf,
    /// Products with stock strictly below this count as low stock.
    pub low_stock_threshold: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inventory_name: "iShop".to_string(),
            products_path: PathBuf::from("products.txt"),
            orders_path: PathBuf::from("orders.txt"),
            low_stock_threshold: 10,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default file names, placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let defaults = Self::default();
        Self {
            products_path: dir.as_ref().join(&defaults.products_path),
            orders_path: dir.as_ref().join(&defaults.orders_path),
            ..defaults
        }
    }
}

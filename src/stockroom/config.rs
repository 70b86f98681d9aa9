use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.csv";
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;
const DEFAULT_CURRENCY: &str = "$";

pub const KEYS: &[&str] = &["data-file", "low-stock-threshold", "currency"];

/// Configuration for stockroom, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct StockroomConfig {
    /// Inventory file; relative paths are resolved against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Quantity below which a product counts as low on stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Symbol printed in front of prices and totals
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            low_stock_threshold: default_low_stock_threshold(),
            currency: default_currency(),
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockroomConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The inventory file, resolved against `home` when relative.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            home.join(path)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "low-stock-threshold" => Some(self.low_stock_threshold.to_string()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(InventoryError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "low-stock-threshold" => {
                self.low_stock_threshold = value.trim().parse().map_err(|_| {
                    InventoryError::Config(format!(
                        "low-stock-threshold must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            "currency" => self.currency = value.to_string(),
            other => {
                return Err(InventoryError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.data_file, "inventory.csv");
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = StockroomConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = StockroomConfig::default();
        config.set("low-stock-threshold", "3").unwrap();
        config.set("currency", "€").unwrap();
        config.save(&nested).unwrap();

        let loaded = StockroomConfig::load(&nested).unwrap();
        assert_eq!(loaded.low_stock_threshold, 3);
        assert_eq!(loaded.currency, "€");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"currency": "£"}"#).unwrap();

        let config = StockroomConfig::load(dir.path()).unwrap();
        assert_eq!(config.currency, "£");
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.data_file, "inventory.csv");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = StockroomConfig::default();
        assert!(config.set("low-stock-threshold", "-1").is_err());
        assert!(config.set("low-stock-threshold", "lots").is_err());
        assert!(config.set("data-file", " ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = StockroomConfig::default();
        assert_eq!(config.get("low-stock-threshold").as_deref(), Some("10"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_data_path_resolution() {
        let home = Path::new("/srv/stock");
        let mut config = StockroomConfig::default();
        assert_eq!(config.data_path(home), home.join("inventory.csv"));

        let absolute = std::env::temp_dir().join("elsewhere.csv");
        config.data_file = absolute.to_string_lossy().into_owned();
        assert_eq!(config.data_path(home), absolute);
    }
}

use crate::error::{Result, StockError};
use crate::query::DEFAULT_LOW_STOCK_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory_data.txt";

pub const KEYS: &[&str] = &["data-file", "low-stock-threshold"];

/// Configuration for stockpile, stored in .stockpile/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// File name of the inventory, relative to the store directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Quantities strictly below this count as low stock
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            low_stock_threshold: default_threshold(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn data_path<P: AsRef<Path>>(&self, store_dir: P) -> PathBuf {
        store_dir.as_ref().join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "low-stock-threshold" => Some(self.low_stock_threshold.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "low-stock-threshold" => {
                let threshold: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("low-stock-threshold must be an integer, got '{}'", value))?;
                if threshold < 0 {
                    return Err("low-stock-threshold cannot be negative".to_string());
                }
                self.low_stock_threshold = threshold;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

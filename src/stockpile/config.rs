use crate::error::{Result, StockError};
use crate::store::StorageFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for stockpile, stored in `<home>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Backing file format
    #[serde(default)]
    pub format: StorageFormat,

    /// Backing file name or path; relative paths resolve against the home
    /// directory. Defaults to `inventory.json` / `inventory.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
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

    /// Full path of the backing file under `home`.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        match &self.data_file {
            Some(file) => home.join(file),
            None => home.join(self.format.default_file_name()),
        }
    }

    pub fn set_data_file(&mut self, file: &str) -> Result<()> {
        let file = file.trim();
        if file.is_empty() {
            return Err(StockError::Config("data-file cannot be empty".to_string()));
        }
        self.data_file = Some(file.to_string());
        Ok(())
    }
}

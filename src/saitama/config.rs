use crate::error::{Result, SaitamaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_DATA_FILENAME: &str = "problems.json";
pub const DEFAULT_BACKUP_DIRNAME: &str = ".saitama_backups";
pub const DEFAULT_SNAPSHOT_PREFIX: &str = "problems";
pub const DEFAULT_MAX_BACKUPS: usize = 5;
pub const DEFAULT_PICK_COUNT: usize = 5;

/// Layout and retention settings for a [`crate::store::fs::FileStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_filename: String,
    pub backup_dirname: String,
    pub snapshot_prefix: String,
    pub max_backups: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_filename: DEFAULT_DATA_FILENAME.to_string(),
            backup_dirname: DEFAULT_BACKUP_DIRNAME.to_string(),
            snapshot_prefix: DEFAULT_SNAPSHOT_PREFIX.to_string(),
            max_backups: DEFAULT_MAX_BACKUPS,
        }
    }
}

impl StoreConfig {
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups;
        self
    }
}

/// User settings, stored next to the problems file in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaitamaConfig {
    /// How many snapshots of problems.json to keep
    #[serde(default = "default_max_backups")]
    pub max_backups: usize,

    /// Default number of problems returned by `pick`
    #[serde(default = "default_pick_count")]
    pub pick_count: usize,
}

fn default_max_backups() -> usize {
    DEFAULT_MAX_BACKUPS
}

fn default_pick_count() -> usize {
    DEFAULT_PICK_COUNT
}

impl Default for SaitamaConfig {
    fn default() -> Self {
        Self {
            max_backups: DEFAULT_MAX_BACKUPS,
            pick_count: DEFAULT_PICK_COUNT,
        }
    }
}

impl SaitamaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SaitamaError::Io)?;
        let config: SaitamaConfig =
            serde_json::from_str(&content).map_err(SaitamaError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SaitamaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SaitamaError::Serialization)?;
        fs::write(config_path, content).map_err(SaitamaError::Io)?;
        Ok(())
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().with_max_backups(self.max_backups)
    }

    /// Sets a value by its CLI key (`max-backups`, `pick-count`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: usize = value.trim().parse().map_err(|_| {
            SaitamaError::Api(format!("'{}' is not a valid number for {}", value, key))
        })?;
        match key {
            "max-backups" | "pick-count" if parsed == 0 => {
                return Err(SaitamaError::Api(format!("{} must be at least 1", key)));
            }
            "max-backups" => self.max_backups = parsed,
            "pick-count" => self.pick_count = parsed,
            other => return Err(SaitamaError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-backups" => Some(self.max_backups.to_string()),
            "pick-count" => Some(self.pick_count.to_string()),
            _ => None,
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["max-backups", "pick-count"]
    }
}

//! # Configuration
//!
//! Stored as `config.json` in the data directory. A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `preview-width` | `50` | Characters of the first paragraph shown by `folio list` (0 hides it) |
//! | `log-level` | `warn` | Default log filter when `FOLIO_LOG` is unset |

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_WIDTH: usize = 50;
const DEFAULT_LOG_LEVEL: &str = "warn";

pub const KEYS: &[&str] = &["preview-width", "log-level"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_WIDTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "preview-width" => Some(self.preview_width.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "preview-width" => {
                self.preview_width = value.trim().parse().map_err(|_| {
                    FolioError::Config(format!(
                        "preview-width must be a non-negative integer, got {}",
                        value
                    ))
                })?;
            }
            "log-level" => {
                let level = value.trim().to_ascii_lowercase();
                LevelFilter::from_str(&level).map_err(|_| {
                    FolioError::Config(format!("invalid log-level: {}", value))
                })?;
                self.log_level = level;
            }
            other => return Err(FolioError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.preview_width, 50);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = FolioConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = FolioConfig::default();
        config.set("preview-width", "20").unwrap();
        config.set("log-level", "DEBUG").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.preview_width, 20);
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"preview_width": 0}"#).unwrap();
        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.preview_width, 0);
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn rejects_bad_values_and_keys() {
        let mut config = FolioConfig::default();
        assert!(config.set("preview-width", "-1").is_err());
        assert!(config.set("log-level", "loud").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn list_all_covers_every_key() {
        let keys: Vec<&str> = FolioConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS);
    }
}

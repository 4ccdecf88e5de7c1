use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::ArrowRushError;

pub const DEFAULT_STEP_MS: u64 = 3000;
pub const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// time allowed to type each arrow
    pub step_ms: u64,
    /// how often the countdown is refreshed
    pub tick_ms: u64,
    pub log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_ms: DEFAULT_STEP_MS,
            tick_ms: DEFAULT_TICK_MS,
            log: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ArrowRushError> {
        if self.step_ms == 0 {
            return Err(ArrowRushError::InvalidStep);
        }
        if self.tick_ms == 0 {
            return Err(ArrowRushError::InvalidTick);
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ArrowRushError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> Result<(), ArrowRushError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            step_ms: 1500,
            tick_ms: 50,
            log: true,
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "step_ms": 2000 }"#).unwrap();
        let loaded = FileConfigStore::with_path(&path).load();
        assert_eq!(loaded.step_ms, 2000);
        assert_eq!(loaded.tick_ms, DEFAULT_TICK_MS);
        assert!(!loaded.log);
    }

    #[test]
    fn validate_rejects_zero_durations() {
        let mut cfg = Config::default();
        assert!(cfg.validate().is_ok());

        cfg.step_ms = 0;
        assert_matches!(cfg.validate(), Err(ArrowRushError::InvalidStep));

        cfg.step_ms = 1000;
        cfg.tick_ms = 0;
        assert_matches!(cfg.validate(), Err(ArrowRushError::InvalidTick));
    }
}

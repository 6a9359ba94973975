//! Configuration for a watch session.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::dedupe::DedupeMode;
use crate::error::{Error, Result};

/// Settings that drive the poll loop and organize passes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Directory whose direct files are sorted
    pub root: PathBuf,
    /// Total wall-clock budget for the session in seconds
    pub max_runtime_secs: u64,
    /// Fixed sleep between polls in milliseconds
    pub poll_interval_ms: u64,
    /// Duplicate detection strategy applied after each pass
    #[serde(default)]
    pub dedupe: DedupeMode,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_runtime_secs: 10,
            poll_interval_ms: 1000,
            dedupe: DedupeMode::default(),
        }
    }
}

impl WatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WatchConfig = toml::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that the settings describe a runnable session.
    pub fn validate(&self) -> Result<()> {
        if self.max_runtime_secs == 0 {
            return Err(Error::Configuration {
                reason: "max_runtime_secs must be greater than 0".to_string(),
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Configuration {
                reason: "poll_interval_ms must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn max_runtime(&self) -> Duration {
        Duration::from_secs(self.max_runtime_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WatchConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.max_runtime_secs, 10);
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.dedupe, DedupeMode::Pattern);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tidywatch.toml");

        let mut config = WatchConfig::default();
        config.root = PathBuf::from("/tmp/downloads");
        config.max_runtime_secs = 30;
        config.dedupe = DedupeMode::Content;
        config.save(&path).unwrap();

        let loaded = WatchConfig::load(&path).unwrap();
        assert_eq!(loaded.root, PathBuf::from("/tmp/downloads"));
        assert_eq!(loaded.max_runtime_secs, 30);
        assert_eq!(loaded.poll_interval_ms, 1000);
        assert_eq!(loaded.dedupe, DedupeMode::Content);
    }

    #[test]
    fn test_dedupe_defaults_to_pattern_when_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tidywatch.toml");
        fs::write(
            &path,
            "root = \"/tmp/downloads\"\nmax_runtime_secs = 5\npoll_interval_ms = 200\n",
        )
        .unwrap();

        let loaded = WatchConfig::load(&path).unwrap();
        assert_eq!(loaded.dedupe, DedupeMode::Pattern);
    }

    #[test]
    fn test_validate_rejects_zero_budgets() {
        let mut config = WatchConfig::default();
        config.max_runtime_secs = 0;
        assert!(config.validate().is_err());

        let mut config = WatchConfig::default();
        config.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = WatchConfig::load_or_default(None).unwrap();
        assert_eq!(config.max_runtime_secs, WatchConfig::default().max_runtime_secs);
    }
}

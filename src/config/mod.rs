//! On-disk client configuration.
//!
//! A single JSON file under the platform config directory. Saves stage to a
//! temporary file and rename into place so a crash never leaves a truncated
//! config behind.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::errors::PlannerError;

const APP_DIR: &str = "studyplan";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "STUDYPLAN_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, PlannerError> {
        let base = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("no config directory available".into()))?;
        Self::from_base(&base)
    }

    /// Builds a manager rooted at an explicit directory (used by tests).
    pub fn with_base_dir(base: &Path) -> Result<Self, PlannerError> {
        Self::from_base(base)
    }

    fn from_base(base: &Path) -> Result<Self, PlannerError> {
        let root = base.join(APP_DIR);
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config, falling back to defaults when no file exists, and
    /// applying the environment override for the base URL.
    pub fn load(&self) -> Result<Config, PlannerError> {
        let mut config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            Config::default()
        };
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        Ok(config)
    }

    /// Writes the config atomically by staging to a temporary file.
    pub fn save(&self, config: &Config) -> Result<(), PlannerError> {
        let tmp = self.path.with_extension("tmp");
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path()).unwrap();
        let config = Config {
            api_base_url: "http://planner.test:9000".into(),
            request_timeout_secs: Some(5),
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        // No stale staging file left behind.
        assert!(!manager.path().with_extension("tmp").exists());
    }
}

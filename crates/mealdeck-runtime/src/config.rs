use crate::{Error, Result};
use mealdeck_providers::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the configuration inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// First letter of the default browse set
    #[serde(default = "default_letter")]
    pub default_letter: char,
    /// Pause before the next page is revealed
    #[serde(default = "default_load_more_delay_ms")]
    pub load_more_delay_ms: u64,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_letter: default_letter(),
            load_more_delay_ms: default_load_more_delay_ms(),
        }
    }
}

impl BrowseConfig {
    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.browse.default_letter.is_ascii_alphabetic() {
            return Err(Error::Config(format!(
                "browse.default_letter must be a letter, got '{}'",
                self.browse.default_letter
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_letter() -> char {
    'a'
}

fn default_load_more_delay_ms() -> u64 {
    300
}

use anyhow::{Context, Result};
use mealdeck_core::{PreferenceStore, resolve_data_dir};
use mealdeck_providers::{HttpClient, HttpRecipeSource};
use mealdeck_runtime::Config;
use std::path::{Path, PathBuf};

/// Log file written while the TUI owns the terminal
pub const LOG_FILE: &str = "mealdeck.log";

/// Everything a command needs from the environment: where the data lives and
/// the effective configuration.
pub struct AppContext {
    data_dir: PathBuf,
    config: Config,
}

impl AppContext {
    pub fn load(data_dir: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let config_path = Config::default_path(&data_dir);
        let mut config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        if let Some(base_url) = base_url {
            config.api.base_url = base_url.to_string();
        }

        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preferences(&self) -> PreferenceStore {
        PreferenceStore::in_dir(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn recipe_source(&self) -> Result<HttpRecipeSource> {
        let client = HttpClient::new(&self.config.api.base_url, self.config.api.timeout())
            .with_context(|| format!("Invalid API base URL: {}", self.config.api.base_url))?;
        Ok(HttpRecipeSource::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_base_url_flag_overrides_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[api]\nbase_url = \"http://from-config/api\"\n",
        )?;
        let dir = temp_dir.path().to_str().unwrap();

        let from_config = AppContext::load(Some(dir), None)?;
        assert_eq!(from_config.config().api.base_url, "http://from-config/api");

        let overridden = AppContext::load(Some(dir), Some("http://flag/api"))?;
        assert_eq!(overridden.config().api.base_url, "http://flag/api");
        assert_eq!(overridden.log_path(), temp_dir.path().join(LOG_FILE));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_reported() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("config.toml"), "[browse\n")?;

        let result = AppContext::load(temp_dir.path().to_str(), None);
        assert!(result.is_err());
        Ok(())
    }
}

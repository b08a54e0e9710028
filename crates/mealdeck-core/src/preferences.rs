use crate::Result;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// File name of the preference store inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Key under which the dark-mode flag is stored
pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable key-value store for UI preferences.
///
/// Values are stored as strings (`darkMode = "true"`). Unknown keys written by
/// other versions are preserved on write.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored dark-mode flag; anything other than the string "true" reads as false
    pub fn dark_mode(&self) -> bool {
        self.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }

    /// Read a string value. Missing file, unreadable file, corrupt TOML and
    /// non-string values all read as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let table = self.read_table()?;
        match table.get(key) {
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                tracing::warn!(key, value = %other, "ignoring non-string preference value");
                None
            }
            None => None,
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string(&table)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(key, value, path = %self.path.display(), "preference saved");
        Ok(())
    }

    fn read_table(&self) -> Option<Table> {
        if !self.path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "cannot read preferences");
                return None;
            }
        };

        match toml::from_str::<Table>(&content) {
            Ok(table) => Some(table),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "corrupt preferences file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_false() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::in_dir(temp_dir.path());
        assert!(!store.dark_mode());
    }

    #[test]
    fn test_value_is_stored_as_string() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = PreferenceStore::in_dir(temp_dir.path());

        store.set_dark_mode(true)?;

        let content = std::fs::read_to_string(store.path())?;
        assert_eq!(content.trim(), r#"darkMode = "true""#);
        Ok(())
    }

    #[test]
    fn test_boolean_literal_is_treated_as_corrupt() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = PreferenceStore::in_dir(temp_dir.path());
        std::fs::write(store.path(), "darkMode = true\n")?;

        assert!(!store.dark_mode());
        Ok(())
    }

    #[test]
    fn test_other_keys_survive_write() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = PreferenceStore::in_dir(temp_dir.path());
        std::fs::write(store.path(), "lastArea = \"Italian\"\n")?;

        store.set_dark_mode(false)?;

        assert_eq!(store.get("lastArea").as_deref(), Some("Italian"));
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
        Ok(())
    }
}

use std::fs;
use std::path::PathBuf;

use dbtune_app::ports::{SettingsStore, SettingsStoreError};
use dbtune_app::settings::Settings;

use crate::config::settings_file::SettingsFile;

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlSettingsStore {
    config_dir: PathBuf,
}

impl TomlSettingsStore {
    pub fn new() -> Result<Self, SettingsStoreError> {
        let config_dir = get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<Settings, SettingsStoreError> {
        let path = self.config_file_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| SettingsStoreError::ReadError(e.to_string()))?;

        let file: SettingsFile = toml::from_str(&content)
            .map_err(|e| SettingsStoreError::InvalidFormat(e.to_string()))?;

        Ok(file.to_settings())
    }

    fn storage_path(&self) -> PathBuf {
        self.config_file_path()
    }
}

fn get_config_dir() -> Result<PathBuf, SettingsStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| SettingsStoreError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("dbtune"))
}

use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Debug, Clone)]
pub enum SettingsStoreError {
    ReadError(String),
    InvalidFormat(String),
    IoError(String),
}

impl std::fmt::Display for SettingsStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsStoreError {}

pub trait SettingsStore: Send + Sync {
    /// A missing settings file yields the defaults.
    fn load(&self) -> Result<Settings, SettingsStoreError>;

    fn storage_path(&self) -> PathBuf;
}

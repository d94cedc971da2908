use std::path::PathBuf;

use serde::Deserialize;

use dbtune_app::settings::Settings;
use dbtune_domain::Engine;

/// `config.toml` as written by the user. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub default_engine: Option<Engine>,
    pub show_cli_command: Option<bool>,
    pub api_host: Option<String>,
    pub token_placeholder: Option<String>,
    pub schema_dir: Option<PathBuf>,
}

impl SettingsFile {
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(engine) = self.default_engine {
            settings.default_engine = engine;
        }
        if let Some(show) = self.show_cli_command {
            settings.display.show_cli_command = show;
        }
        if let Some(host) = &self.api_host {
            settings.commands.api_host = host.clone();
        }
        if let Some(token) = &self.token_placeholder {
            settings.commands.token_placeholder = token.clone();
        }
        settings.schema_dir = self.schema_dir.clone();
        settings
    }
}

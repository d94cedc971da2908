use std::path::PathBuf;

use dbtune_domain::Engine;

use crate::command_synthesis::CommandOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show the `doctl` command under the `curl` command.
    pub show_cli_command: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_cli_command: true,
        }
    }
}

/// Startup configuration, read from the settings file and overridden by
/// command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub default_engine: Engine,
    pub display: DisplayOptions,
    pub commands: CommandOptions,
    /// Directory whose `<engine>.toml` files replace the built-in schemas.
    pub schema_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub engine: Option<Engine>,
    pub show_cli_command: Option<bool>,
}

impl Settings {
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(engine) = overrides.engine {
            self.default_engine = engine;
        }
        if let Some(show) = overrides.show_cli_command {
            self.display.show_cli_command = show;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_show_cli_command() {
        let settings = Settings::default();

        assert!(settings.display.show_cli_command);
        assert_eq!(settings.default_engine, Engine::MySql);
        assert_eq!(settings.commands.api_host, "api.digitalocean.com");
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(false), false)]
    #[case(Some(true), true)]
    fn cli_visibility_override(#[case] flag: Option<bool>, #[case] expected: bool) {
        let overrides = SettingsOverrides {
            show_cli_command: flag,
            ..Default::default()
        };

        let settings = Settings::default().with_overrides(&overrides);

        assert_eq!(settings.display.show_cli_command, expected);
    }

    #[test]
    fn engine_override_replaces_default() {
        let overrides = SettingsOverrides {
            engine: Some(Engine::Kafka),
            ..Default::default()
        };

        let settings = Settings::default().with_overrides(&overrides);

        assert_eq!(settings.default_engine, Engine::Kafka);
    }
}

//! Builds the `curl` and `doctl` commands equivalent to the current form.
//!
//! Output is a pure function of its inputs. Values are embedded inside single
//! quotes verbatim; a value containing `'` produces a command the shell will
//! not parse as intended.

use serde::Serialize;

use dbtune_domain::{ConfigState, Engine};

use crate::command_panel_state::CommandTarget;

pub const DEFAULT_API_HOST: &str = "api.digitalocean.com";
pub const DEFAULT_TOKEN_PLACEHOLDER: &str = "$DIGITALOCEAN_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    pub api_host: String,
    /// Written after `Bearer` in the Authorization header.
    pub token_placeholder: String,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            token_placeholder: DEFAULT_TOKEN_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPair {
    pub http_command: String,
    pub cli_command: String,
}

impl CommandPair {
    /// Both commands are empty together.
    pub fn is_empty(&self) -> bool {
        self.http_command.is_empty()
    }

    pub fn get(&self, target: CommandTarget) -> &str {
        match target {
            CommandTarget::Http => &self.http_command,
            CommandTarget::Cli => &self.cli_command,
        }
    }
}

#[derive(Serialize)]
struct PatchBody<'a> {
    config: &'a ConfigState,
}

/// Returns an empty pair when the database ID is blank or nothing is set.
pub fn synthesize(
    database_id: &str,
    config: &ConfigState,
    engine: Engine,
    options: &CommandOptions,
) -> CommandPair {
    // A whitespace-only ID counts as missing
    let database_id = database_id.trim();
    if database_id.is_empty() || config.is_empty() {
        return CommandPair::default();
    }

    match render(database_id, config, engine, options) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, engine = %engine, "failed to serialize config");
            CommandPair::default()
        }
    }
}

fn render(
    database_id: &str,
    config: &ConfigState,
    engine: Engine,
    options: &CommandOptions,
) -> Result<CommandPair, serde_json::Error> {
    let body = serde_json::to_string_pretty(&PatchBody { config })?;
    let compact = serde_json::to_string(config)?;

    let http_command = format!(
        "curl -X PATCH \\\n  \
         -H \"Content-Type: application/json\" \\\n  \
         -H \"Authorization: Bearer {token}\" \\\n  \
         -d '{body}' \\\n  \
         \"https://{host}/v2/databases/{id}/config\"",
        token = options.token_placeholder,
        body = body,
        host = options.api_host,
        id = database_id,
    );

    let cli_command = format!(
        "doctl databases configuration update {} --engine {} --config-json '{}'",
        database_id,
        engine.id(),
        compact
    );

    Ok(CommandPair {
        http_command,
        cli_command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbtune_domain::{EngineSchema, Field, FieldDescriptor, FieldInput, FieldKind};
    use rstest::rstest;

    fn mysql_schema() -> EngineSchema {
        EngineSchema::flat(
            Engine::MySql,
            vec![
                Field::new(
                    "backup_hour",
                    FieldDescriptor::new(
                        FieldKind::Integer {
                            min: Some(0.0),
                            max: Some(23.0),
                        },
                        "Backup hour",
                    ),
                ),
                Field::new(
                    "sql_mode",
                    FieldDescriptor::new(
                        FieldKind::Text {
                            min_length: None,
                            max_length: Some(1024),
                            pattern: None,
                        },
                        "SQL mode",
                    ),
                ),
                Field::new(
                    "slow_query_log",
                    FieldDescriptor::new(FieldKind::Boolean, "Slow query log"),
                ),
                Field::new(
                    "long_query_time",
                    FieldDescriptor::new(
                        FieldKind::Real {
                            min: Some(0.0),
                            max: Some(3600.0),
                        },
                        "Threshold",
                    ),
                ),
            ],
        )
        .unwrap()
    }

    fn backup_hour_config() -> ConfigState {
        ConfigState::new().apply_change(
            &mysql_schema(),
            "backup_hour",
            FieldInput::Text("3".into()),
        )
    }

    mod empty_cases {
        use super::*;

        #[rstest]
        #[case("", ConfigState::new())]
        #[case("abc", ConfigState::new())]
        #[case("", backup_hour_config())]
        #[case("   ", backup_hour_config())]
        fn returns_empty_pair(#[case] database_id: &str, #[case] config: ConfigState) {
            let pair = synthesize(database_id, &config, Engine::MySql, &CommandOptions::default());

            assert_eq!(pair, CommandPair::default());
            assert!(pair.is_empty());
        }
    }

    mod commands {
        use super::*;

        #[test]
        fn cli_command_uses_compact_json() {
            let pair = synthesize(
                "abc",
                &backup_hour_config(),
                Engine::MySql,
                &CommandOptions::default(),
            );

            assert_eq!(
                pair.cli_command,
                r#"doctl databases configuration update abc --engine mysql --config-json '{"backup_hour":3}'"#
            );
        }

        #[test]
        fn http_command_embeds_pretty_body() {
            let pair = synthesize(
                "abc",
                &backup_hour_config(),
                Engine::MySql,
                &CommandOptions::default(),
            );

            insta::assert_snapshot!(pair.http_command, @r#"
curl -X PATCH \
  -H "Content-Type: application/json" \
  -H "Authorization: Bearer $DIGITALOCEAN_TOKEN" \
  -d '{
  "config": {
    "backup_hour": 3
  }
}' \
  "https://api.digitalocean.com/v2/databases/abc/config"
"#);
        }

        #[test]
        fn keys_follow_insertion_order_and_json_types() {
            let schema = mysql_schema();
            let config = ConfigState::new()
                .apply_change(&schema, "sql_mode", FieldInput::Text("ANSI".into()))
                .apply_change(&schema, "slow_query_log", FieldInput::Toggle(true))
                .apply_change(&schema, "long_query_time", FieldInput::Text("0.5".into()))
                .apply_change(&schema, "backup_hour", FieldInput::Text("x".into()));

            let pair = synthesize("db-1", &config, Engine::MySql, &CommandOptions::default());

            assert!(pair.cli_command.ends_with(
                r#"'{"sql_mode":"ANSI","slow_query_log":true,"long_query_time":0.5,"backup_hour":null}'"#
            ));
        }

        #[test]
        fn engine_id_is_passed_to_cli() {
            let schema = EngineSchema::flat(
                Engine::Redis,
                vec![Field::new(
                    "redis_timeout",
                    FieldDescriptor::new(
                        FieldKind::Integer {
                            min: Some(0.0),
                            max: Some(31_536_000.0),
                        },
                        "Timeout",
                    ),
                )],
            )
            .unwrap();
            let config = ConfigState::new().apply_change(
                &schema,
                "redis_timeout",
                FieldInput::Text("300".into()),
            );

            let pair = synthesize("abc", &config, Engine::Redis, &CommandOptions::default());

            assert!(pair.cli_command.contains("--engine redis "));
        }

        #[test]
        fn large_whole_numbers_are_written_as_digits() {
            let schema = EngineSchema::flat(
                Engine::Kafka,
                vec![Field::new(
                    "log_retention_bytes",
                    FieldDescriptor::new(
                        FieldKind::Integer {
                            min: Some(-1.0),
                            max: Some(9_223_372_036_854_776_000.0),
                        },
                        "Retention bytes",
                    ),
                )],
            )
            .unwrap();
            let config = ConfigState::new().apply_change(
                &schema,
                "log_retention_bytes",
                FieldInput::Text("10000000000000000000".into()),
            );

            let pair = synthesize("abc", &config, Engine::Kafka, &CommandOptions::default());

            assert_eq!(
                pair.cli_command,
                r#"doctl databases configuration update abc --engine kafka --config-json '{"log_retention_bytes":10000000000000000000}'"#
            );
        }

        #[test]
        fn options_override_host_and_token() {
            let options = CommandOptions {
                api_host: "api.example.test".into(),
                token_placeholder: "YOUR_API_TOKEN".into(),
            };

            let pair = synthesize("abc", &backup_hour_config(), Engine::MySql, &options);

            assert!(pair.http_command.contains("Bearer YOUR_API_TOKEN"));
            assert!(
                pair.http_command
                    .contains("\"https://api.example.test/v2/databases/abc/config\"")
            );
        }

        #[test]
        fn database_id_is_trimmed() {
            let pair = synthesize(
                "  abc \n",
                &backup_hour_config(),
                Engine::MySql,
                &CommandOptions::default(),
            );

            assert!(
                pair.cli_command
                    .starts_with("doctl databases configuration update abc --engine")
            );
        }

        #[test]
        fn output_is_deterministic() {
            let config = backup_hour_config();
            let options = CommandOptions::default();

            let first = synthesize("abc", &config, Engine::MySql, &options);
            let second = synthesize("abc", &config, Engine::MySql, &options);

            assert_eq!(first, second);
        }

        #[rstest]
        #[case(CommandTarget::Http, "curl -X PATCH")]
        #[case(CommandTarget::Cli, "doctl databases")]
        fn get_selects_command(#[case] target: CommandTarget, #[case] prefix: &str) {
            let pair = synthesize(
                "abc",
                &backup_hour_config(),
                Engine::MySql,
                &CommandOptions::default(),
            );

            assert!(pair.get(target).starts_with(prefix));
        }
    }
}

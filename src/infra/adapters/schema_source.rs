use std::fs;
use std::path::PathBuf;

use dbtune_app::ports::{SchemaSource, SchemaSourceError};
use dbtune_domain::{Engine, EngineSchema};

use crate::schema::{SchemaDocument, embedded};

/// Reads engine schemas from TOML. A file named `<engine-id>.toml` in the
/// override directory wins over the built-in schema for that engine.
pub struct TomlSchemaSource {
    override_dir: Option<PathBuf>,
}

impl TomlSchemaSource {
    pub fn embedded() -> Self {
        Self { override_dir: None }
    }

    pub fn with_override_dir(dir: PathBuf) -> Self {
        Self {
            override_dir: Some(dir),
        }
    }

    fn override_path(&self, engine: Engine) -> Option<PathBuf> {
        self.override_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.toml", engine.id())))
            .filter(|path| path.exists())
    }
}

impl SchemaSource for TomlSchemaSource {
    fn load(&self, engine: Engine) -> Result<EngineSchema, SchemaSourceError> {
        let content = match self.override_path(engine) {
            Some(path) => {
                tracing::info!(engine = %engine, path = %path.display(), "using schema override");
                fs::read_to_string(&path).map_err(|e| SchemaSourceError::ReadError {
                    engine,
                    message: e.to_string(),
                })?
            }
            None => embedded(engine).to_string(),
        };

        let document: SchemaDocument =
            toml::from_str(&content).map_err(|e| SchemaSourceError::InvalidFormat {
                engine,
                message: e.to_string(),
            })?;

        if document.engine != engine {
            return Err(SchemaSourceError::InvalidFormat {
                engine,
                message: format!("document declares engine '{}'", document.engine),
            });
        }

        Ok(document.into_schema()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbtune_domain::FieldKind;
    use rstest::rstest;
    use tempfile::TempDir;

    mod embedded_corpus {
        use super::*;

        #[rstest]
        #[case(Engine::MySql, 34)]
        #[case(Engine::Postgres, 62)]
        #[case(Engine::Redis, 11)]
        #[case(Engine::MongoDb, 5)]
        #[case(Engine::Kafka, 39)]
        #[case(Engine::OpenSearch, 38)]
        fn loads_every_engine(#[case] engine: Engine, #[case] field_count: usize) {
            let schema = TomlSchemaSource::embedded().load(engine).unwrap();

            assert_eq!(schema.engine(), engine);
            assert_eq!(schema.len(), field_count);
        }

        #[test]
        fn every_select_has_options() {
            let source = TomlSchemaSource::embedded();

            for engine in Engine::all_variants() {
                let schema = source.load(*engine).unwrap();
                for field in schema.fields() {
                    if let FieldKind::Select { options } = field.kind() {
                        assert!(!options.is_empty(), "{}.{}", engine, field.name);
                    }
                }
            }
        }

        #[test]
        fn only_postgres_is_sectioned() {
            let source = TomlSchemaSource::embedded();

            for engine in Engine::all_variants() {
                let schema = source.load(*engine).unwrap();
                assert_eq!(schema.is_sectioned(), *engine == Engine::Postgres);
            }

            let titles: Vec<_> = source
                .load(Engine::Postgres)
                .unwrap()
                .sections()
                .iter()
                .filter_map(|s| s.title.clone())
                .collect();
            assert_eq!(
                titles,
                vec![
                    "PostgreSQL Core Settings",
                    "PGBouncer Connection Pooling",
                    "TimescaleDB Settings"
                ]
            );
        }

        #[test]
        fn mysql_backup_hour_is_bounded_integer() {
            let schema = TomlSchemaSource::embedded().load(Engine::MySql).unwrap();

            let descriptor = schema.field("backup_hour").unwrap();

            assert_eq!(
                descriptor.kind,
                FieldKind::Integer {
                    min: Some(0.0),
                    max: Some(23.0)
                }
            );
            assert_eq!(descriptor.example.as_deref(), Some("3"));
        }
    }

    mod override_dir {
        use super::*;

        const REDIS_OVERRIDE: &str = r#"
engine = "redis"

[[sections]]
key = "redis"

[[sections.fields]]
name = "redis_timeout"
type = "integer"
min = 0
"#;

        #[test]
        fn file_in_override_dir_replaces_builtin() {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join("redis.toml"), REDIS_OVERRIDE).unwrap();
            let source = TomlSchemaSource::with_override_dir(temp_dir.path().to_path_buf());

            let schema = source.load(Engine::Redis).unwrap();

            assert_eq!(schema.len(), 1);
        }

        #[test]
        fn missing_file_falls_back_to_builtin() {
            let temp_dir = TempDir::new().unwrap();
            let source = TomlSchemaSource::with_override_dir(temp_dir.path().to_path_buf());

            let schema = source.load(Engine::Kafka).unwrap();

            assert_eq!(schema.len(), 39);
        }

        #[test]
        fn malformed_file_is_invalid_format() {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join("mysql.toml"), "engine = [").unwrap();
            let source = TomlSchemaSource::with_override_dir(temp_dir.path().to_path_buf());

            let result = source.load(Engine::MySql);

            assert!(matches!(
                result,
                Err(SchemaSourceError::InvalidFormat {
                    engine: Engine::MySql,
                    ..
                })
            ));
        }

        #[test]
        fn engine_mismatch_is_rejected() {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join("kafka.toml"), REDIS_OVERRIDE).unwrap();
            let source = TomlSchemaSource::with_override_dir(temp_dir.path().to_path_buf());

            let result = source.load(Engine::Kafka);

            assert!(matches!(
                result,
                Err(SchemaSourceError::InvalidFormat { .. })
            ));
        }
    }
}

use dbtune_domain::{Engine, SchemaRegistry};

use crate::ports::{SchemaSource, SchemaSourceError};

/// Loads every engine's schema up front; the first failure aborts startup.
pub fn load_registry(source: &dyn SchemaSource) -> Result<SchemaRegistry, SchemaSourceError> {
    let schemas = Engine::all_variants()
        .iter()
        .map(|engine| {
            let schema = source.load(*engine)?;
            tracing::debug!(engine = %engine, fields = schema.len(), "loaded schema");
            Ok(schema)
        })
        .collect::<Result<Vec<_>, SchemaSourceError>>()?;

    Ok(SchemaRegistry::from_schemas(schemas)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_registry;
    use dbtune_domain::EngineSchema;

    struct RegistrySource;

    impl SchemaSource for RegistrySource {
        fn load(&self, engine: Engine) -> Result<EngineSchema, SchemaSourceError> {
            Ok(sample_registry().schema(engine).clone())
        }
    }

    struct BrokenKafka;

    impl SchemaSource for BrokenKafka {
        fn load(&self, engine: Engine) -> Result<EngineSchema, SchemaSourceError> {
            if engine == Engine::Kafka {
                return Err(SchemaSourceError::InvalidFormat {
                    engine,
                    message: "expected table".to_string(),
                });
            }
            RegistrySource.load(engine)
        }
    }

    #[test]
    fn loads_all_engines() {
        let registry = load_registry(&RegistrySource).unwrap();

        for engine in Engine::all_variants() {
            assert_eq!(registry.schema(*engine).engine(), *engine);
        }
    }

    #[test]
    fn first_failure_is_returned() {
        let err = load_registry(&BrokenKafka).unwrap_err();

        assert!(matches!(
            err,
            SchemaSourceError::InvalidFormat {
                engine: Engine::Kafka,
                ..
            }
        ));
    }
}

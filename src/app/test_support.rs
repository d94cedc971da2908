//! Small in-memory schemas for tests across the workspace.

use dbtune_domain::{
    Engine, EngineSchema, Field, FieldDescriptor, FieldKind, SchemaRegistry, Section,
};

fn integer(min: Option<f64>, max: Option<f64>) -> FieldKind {
    FieldKind::Integer { min, max }
}

fn text(max_length: Option<usize>) -> FieldKind {
    FieldKind::Text {
        min_length: None,
        max_length,
        pattern: None,
    }
}

fn select(options: &[&str]) -> FieldKind {
    FieldKind::Select {
        options: options.iter().map(ToString::to_string).collect(),
    }
}

/// MySQL fields, in order: `backup_hour`, `sql_mode`, `slow_query_log`,
/// `internal_tmp_mem_storage_engine`, `long_query_time`.
pub fn mysql_schema() -> EngineSchema {
    let fields = vec![
        Field::new(
            "backup_hour",
            FieldDescriptor::new(
                integer(Some(0.0), Some(23.0)),
                "The hour of day (in UTC) when backup for the service starts.",
            )
            .with_example("3"),
        ),
        Field::new(
            "sql_mode",
            FieldDescriptor::new(text(Some(1024)), "Global SQL mode.")
                .with_example("ANSI,TRADITIONAL"),
        ),
        Field::new(
            "slow_query_log",
            FieldDescriptor::new(
                FieldKind::Boolean,
                "Slow query log enables capturing of slow queries.",
            ),
        ),
        Field::new(
            "internal_tmp_mem_storage_engine",
            FieldDescriptor::new(
                select(&["TempTable", "MEMORY"]),
                "The storage engine for in-memory internal temporary tables.",
            ),
        ),
        Field::new(
            "long_query_time",
            FieldDescriptor::new(
                FieldKind::Real {
                    min: Some(0.0),
                    max: Some(3600.0),
                },
                "The slow query log threshold.\nQueries slower than this are logged.",
            ),
        ),
    ];
    // Fixture data is well-formed
    EngineSchema::flat(Engine::MySql, fields).unwrap_or_else(|e| panic!("{}", e))
}

/// Two titled sections: `work_mem` then `pool_mode`.
pub fn postgres_schema() -> EngineSchema {
    EngineSchema::new(
        Engine::Postgres,
        vec![
            Section::new(
                "postgres",
                Some("PostgreSQL Core Settings".to_string()),
                vec![Field::new(
                    "work_mem",
                    FieldDescriptor::new(integer(Some(1.0), Some(1024.0)), "Work memory in MB."),
                )],
            ),
            Section::new(
                "pgbouncer",
                Some("PGBouncer Connection Pooling".to_string()),
                vec![Field::new(
                    "pool_mode",
                    FieldDescriptor::new(
                        select(&["session", "transaction", "statement"]),
                        "PGBouncer pool mode.",
                    ),
                )],
            ),
        ],
    )
    .unwrap_or_else(|e| panic!("{}", e))
}

fn single_field_schema(engine: Engine, name: &str) -> EngineSchema {
    EngineSchema::flat(
        engine,
        vec![Field::new(
            name,
            FieldDescriptor::new(integer(Some(0.0), None), "A setting."),
        )],
    )
    .unwrap_or_else(|e| panic!("{}", e))
}

pub fn sample_registry() -> SchemaRegistry {
    SchemaRegistry::from_schemas(vec![
        mysql_schema(),
        postgres_schema(),
        single_field_schema(Engine::Redis, "redis_timeout"),
        single_field_schema(Engine::MongoDb, "slow_op_threshold_ms"),
        single_field_schema(Engine::Kafka, "log_retention_hours"),
        single_field_schema(Engine::OpenSearch, "thread_pool_search_size"),
    ])
    .unwrap_or_else(|e| panic!("{}", e))
}

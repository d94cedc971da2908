mod document;

pub use document::SchemaDocument;

use dbtune_domain::Engine;

/// Built-in schema text compiled into the binary.
pub fn embedded(engine: Engine) -> &'static str {
    match engine {
        Engine::MySql => include_str!("data/mysql.toml"),
        Engine::Postgres => include_str!("data/postgres.toml"),
        Engine::Redis => include_str!("data/redis.toml"),
        Engine::MongoDb => include_str!("data/mongodb.toml"),
        Engine::Kafka => include_str!("data/kafka.toml"),
        Engine::OpenSearch => include_str!("data/opensearch.toml"),
    }
}

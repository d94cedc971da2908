use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Managed database engine whose advanced settings can be tuned.
///
/// Deserialization goes through [`FromStr`], so config files accept the same
/// aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Engine {
    #[default]
    MySql,
    Postgres,
    Redis,
    MongoDb,
    Kafka,
    OpenSearch,
}

impl Engine {
    /// Tab order.
    pub fn all_variants() -> &'static [Engine] {
        &[
            Engine::MySql,
            Engine::Postgres,
            Engine::Redis,
            Engine::MongoDb,
            Engine::Kafka,
            Engine::OpenSearch,
        ]
    }

    /// Identifier passed to `doctl --engine`.
    pub fn id(self) -> &'static str {
        match self {
            Engine::MySql => "mysql",
            Engine::Postgres => "postgres",
            Engine::Redis => "redis",
            Engine::MongoDb => "mongodb",
            Engine::Kafka => "kafka",
            Engine::OpenSearch => "opensearch",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Engine::MySql => "MySQL",
            Engine::Postgres => "PostgreSQL",
            Engine::Redis => "Caching",
            Engine::MongoDb => "MongoDB",
            Engine::Kafka => "Kafka",
            Engine::OpenSearch => "OpenSearch",
        }
    }

    pub fn index(self) -> usize {
        Self::all_variants()
            .iter()
            .position(|e| *e == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Engine {
        let all = Self::all_variants();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(self) -> Engine {
        let all = Self::all_variants();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    pub fn from_index(index: usize) -> Option<Engine> {
        Self::all_variants().get(index).copied()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(Engine::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Engine::Postgres),
            "redis" | "caching" => Ok(Engine::Redis),
            "mongodb" | "mongo" => Ok(Engine::MongoDb),
            "kafka" => Ok(Engine::Kafka),
            "opensearch" => Ok(Engine::OpenSearch),
            _ => Err(format!("Unknown engine: {}", s)),
        }
    }
}

impl TryFrom<String> for Engine {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

use dbtune_domain::{Engine, EngineSchema, SchemaError};

#[derive(Debug, Clone)]
pub enum SchemaSourceError {
    ReadError { engine: Engine, message: String },
    InvalidFormat { engine: Engine, message: String },
    Invalid(SchemaError),
}

impl std::fmt::Display for SchemaSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadError { engine, message } => {
                write!(f, "Failed to read {} schema: {}", engine, message)
            }
            Self::InvalidFormat { engine, message } => {
                write!(f, "Malformed {} schema: {}", engine, message)
            }
            Self::Invalid(err) => write!(f, "Invalid schema: {}", err),
        }
    }
}

impl std::error::Error for SchemaSourceError {}

impl From<SchemaError> for SchemaSourceError {
    fn from(err: SchemaError) -> Self {
        Self::Invalid(err)
    }
}

/// Supplies the field schema of one engine.
pub trait SchemaSource: Send + Sync {
    fn load(&self, engine: Engine) -> Result<EngineSchema, SchemaSourceError>;
}

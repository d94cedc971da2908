pub mod config;
pub mod engine;
pub mod field;
pub mod schema;

pub use config::{ConfigState, ConfigValue, FieldInput, coerce_number};
pub use engine::Engine;
pub use field::{Field, FieldDescriptor, FieldKind};
pub use schema::{EngineSchema, SchemaError, SchemaRegistry, Section};

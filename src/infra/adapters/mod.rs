pub mod schema_source;
pub mod settings_store;

pub use schema_source::TomlSchemaSource;
pub use settings_store::TomlSettingsStore;

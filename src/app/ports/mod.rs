pub mod clipboard;
pub mod renderer;
pub mod schema_source;
pub mod settings_store;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use renderer::Renderer;
pub use schema_source::{SchemaSource, SchemaSourceError};
pub use settings_store::{SettingsStore, SettingsStoreError};

#[cfg(test)]
pub use clipboard::MockClipboardWriter;

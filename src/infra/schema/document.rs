use serde::Deserialize;

use dbtune_domain::{
    Engine, EngineSchema, Field, FieldDescriptor, FieldKind, SchemaError, Section,
};

/// On-disk form of one engine's schema.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    pub engine: Engine,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    pub key: String,
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindTag {
    Integer,
    Number,
    Text,
    Select,
    Checkbox,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: KindTag,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub example: Option<toml::Value>,
}

impl SchemaDocument {
    pub fn into_schema(self) -> Result<EngineSchema, SchemaError> {
        let sections = self
            .sections
            .into_iter()
            .map(SectionEntry::into_section)
            .collect();
        EngineSchema::new(self.engine, sections)
    }
}

impl SectionEntry {
    fn into_section(self) -> Section {
        let fields = self.fields.into_iter().map(FieldEntry::into_field).collect();
        Section::new(self.key, self.title, fields)
    }
}

impl FieldEntry {
    fn into_field(self) -> Field {
        let kind = match self.kind {
            KindTag::Integer => FieldKind::Integer {
                min: self.min,
                max: self.max,
            },
            KindTag::Number => FieldKind::Real {
                min: self.min,
                max: self.max,
            },
            KindTag::Text => FieldKind::Text {
                min_length: self.min_length,
                max_length: self.max_length,
                pattern: self.pattern,
            },
            KindTag::Select => FieldKind::Select {
                options: self.options,
            },
            KindTag::Checkbox => FieldKind::Boolean,
        };

        let descriptor = FieldDescriptor::new(kind, self.description);
        let descriptor = match self.example.as_ref() {
            Some(example) => descriptor.with_example(example_text(example)),
            None => descriptor,
        };
        Field::new(self.name, descriptor)
    }
}

/// Lists are shown comma-joined.
fn example_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Array(items) => items
            .iter()
            .map(example_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::engine::Engine;
use super::field::{Field, FieldDescriptor, FieldKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{engine}: select field '{field}' has no options")]
    SelectWithoutOptions { engine: Engine, field: String },
    #[error("{engine}: field '{field}' is declared more than once")]
    DuplicateField { engine: Engine, field: String },
    #[error("{engine}: field '{field}' has min {min} greater than max {max}")]
    InvertedBounds {
        engine: Engine,
        field: String,
        min: f64,
        max: f64,
    },
    #[error("{engine}: schema has no fields")]
    Empty { engine: Engine },
    #[error("no schema loaded for engine {0}")]
    MissingEngine(Engine),
}

/// A group of fields rendered under one heading. Untitled sections render
/// without a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: String,
    pub title: Option<String>,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(key: impl Into<String>, title: Option<String>, fields: Vec<Field>) -> Self {
        Self {
            key: key.into(),
            title,
            fields,
        }
    }
}

/// Ordered field set for one engine. Field order is authoring order.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSchema {
    engine: Engine,
    sections: Vec<Section>,
    index: HashMap<String, (usize, usize)>,
}

impl EngineSchema {
    pub fn new(engine: Engine, sections: Vec<Section>) -> Result<Self, SchemaError> {
        let mut index = HashMap::new();
        let mut seen = HashSet::new();

        for (section_idx, section) in sections.iter().enumerate() {
            for (field_idx, field) in section.fields.iter().enumerate() {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        engine,
                        field: field.name.clone(),
                    });
                }
                validate_field(engine, field)?;
                index.insert(field.name.clone(), (section_idx, field_idx));
            }
        }

        if index.is_empty() {
            return Err(SchemaError::Empty { engine });
        }

        Ok(Self {
            engine,
            sections,
            index,
        })
    }

    /// Builds a schema with a single untitled section.
    pub fn flat(engine: Engine, fields: Vec<Field>) -> Result<Self, SchemaError> {
        Self::new(engine, vec![Section::new(engine.id(), None, fields)])
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_sectioned(&self) -> bool {
        self.sections.iter().any(|s| s.title.is_some())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index
            .get(name)
            .map(|&(s, f)| &self.sections[s].fields[f].descriptor)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Flat index of the first field of every non-empty section, ascending.
    pub fn section_starts(&self) -> Vec<usize> {
        let mut starts = Vec::with_capacity(self.sections.len());
        let mut offset = 0;
        for section in &self.sections {
            if !section.fields.is_empty() {
                starts.push(offset);
            }
            offset += section.fields.len();
        }
        starts
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn validate_field(engine: Engine, field: &Field) -> Result<(), SchemaError> {
    match field.kind() {
        FieldKind::Select { options } if options.is_empty() => {
            Err(SchemaError::SelectWithoutOptions {
                engine,
                field: field.name.clone(),
            })
        }
        FieldKind::Integer {
            min: Some(min),
            max: Some(max),
        }
        | FieldKind::Real {
            min: Some(min),
            max: Some(max),
        } if min > max => Err(SchemaError::InvertedBounds {
            engine,
            field: field.name.clone(),
            min: *min,
            max: *max,
        }),
        _ => Ok(()),
    }
}

/// One schema per engine, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<Engine, EngineSchema>,
}

impl SchemaRegistry {
    /// Every engine must be covered.
    pub fn from_schemas(
        schemas: impl IntoIterator<Item = EngineSchema>,
    ) -> Result<Self, SchemaError> {
        let schemas: HashMap<Engine, EngineSchema> =
            schemas.into_iter().map(|s| (s.engine(), s)).collect();

        if let Some(missing) = Engine::all_variants()
            .iter()
            .find(|e| !schemas.contains_key(e))
        {
            return Err(SchemaError::MissingEngine(*missing));
        }

        Ok(Self { schemas })
    }

    pub fn schema(&self, engine: Engine) -> &EngineSchema {
        // from_schemas guarantees every engine is present
        &self.schemas[&engine]
    }

    pub fn field(&self, engine: Engine, name: &str) -> Option<&FieldDescriptor> {
        self.schema(engine).field(name)
    }
}

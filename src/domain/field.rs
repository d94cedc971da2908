/// Input kind of a configuration parameter, carrying only the attributes
/// that apply to that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Integer {
        min: Option<f64>,
        max: Option<f64>,
    },
    Real {
        min: Option<f64>,
        max: Option<f64>,
    },
    Text {
        min_length: Option<usize>,
        max_length: Option<usize>,
        pattern: Option<String>,
    },
    /// Options are non-empty; enforced when the schema is built.
    Select {
        options: Vec<String>,
    },
    Boolean,
}

impl FieldKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Integer { .. } | FieldKind::Real { .. })
    }

    pub fn bounds(&self) -> Option<(Option<f64>, Option<f64>)> {
        match self {
            FieldKind::Integer { min, max } | FieldKind::Real { min, max } => Some((*min, *max)),
            _ => None,
        }
    }
}

/// Static metadata for one parameter. `example` is shown as a hint only and
/// never becomes a value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub description: String,
    pub example: Option<String>,
}

impl FieldDescriptor {
    pub fn new(kind: FieldKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// A named descriptor as it appears in a schema section.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub descriptor: FieldDescriptor,
}

impl Field {
    pub fn new(name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
        }
    }

    pub fn kind(&self) -> &FieldKind {
        &self.descriptor.kind
    }
}

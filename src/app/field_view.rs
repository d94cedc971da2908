//! Presentation rules derived from a field descriptor: which input to draw,
//! its label, placeholder, range hint and dropdown choices.
//!
//! Hints are advisory; nothing here rejects or alters a value.

use dbtune_domain::{FieldDescriptor, FieldInput, FieldKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Toggle,
    Dropdown,
    NumberBox,
    TextBox,
}

pub fn affordance(kind: &FieldKind) -> Affordance {
    match kind {
        FieldKind::Boolean => Affordance::Toggle,
        FieldKind::Select { .. } => Affordance::Dropdown,
        FieldKind::Integer { .. } | FieldKind::Real { .. } => Affordance::NumberBox,
        FieldKind::Text { .. } => Affordance::TextBox,
    }
}

pub const UNSET_CHOICE_LABEL: &str = "Select...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectChoice<'a> {
    Unset,
    Option(&'a str),
}

impl SelectChoice<'_> {
    pub fn label(&self) -> &str {
        match self {
            SelectChoice::Unset => UNSET_CHOICE_LABEL,
            SelectChoice::Option(option) => option,
        }
    }

    pub fn to_input(&self) -> FieldInput {
        match self {
            SelectChoice::Unset => FieldInput::Unset,
            SelectChoice::Option(option) => FieldInput::Text((*option).to_string()),
        }
    }
}

/// The unset choice first, then every option in schema order.
pub fn select_choices(options: &[String]) -> Vec<SelectChoice<'_>> {
    std::iter::once(SelectChoice::Unset)
        .chain(options.iter().map(|o| SelectChoice::Option(o.as_str())))
        .collect()
}

/// `backup_hour` -> `Backup Hour`.
pub fn display_label(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn placeholder(descriptor: &FieldDescriptor) -> Option<String> {
    descriptor
        .example
        .as_ref()
        .map(|example| format!("Example: {}", example))
}

/// Parenthesized range hint, shown after "Valid range: ".
pub fn limits_text(kind: &FieldKind) -> Option<String> {
    match kind {
        FieldKind::Integer { min, max } | FieldKind::Real { min, max } => match (min, max) {
            (Some(min), Some(max)) => Some(format!("({} - {})", min, max)),
            (Some(min), None) => Some(format!("({} or more)", min)),
            (None, Some(max)) => Some(format!("(up to {})", max)),
            (None, None) => None,
        },
        FieldKind::Text {
            max_length: Some(max_length),
            ..
        } => Some(format!("(max {} characters)", max_length)),
        _ => None,
    }
}

pub fn kind_badge(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer { .. } => "integer",
        FieldKind::Real { .. } => "number",
        FieldKind::Text { .. } | FieldKind::Select { .. } => "string",
        FieldKind::Boolean => "boolean",
    }
}

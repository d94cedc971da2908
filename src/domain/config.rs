use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::field::FieldKind;
use super::schema::EngineSchema;

/// Integral values below this magnitude are written as plain digits, as
/// JavaScript number formatting does; larger ones use exponent form.
const MAX_JSON_INTEGER: f64 = 1.0e21;

/// A value the user has set for one parameter.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl ConfigValue {
    fn from_input(kind: &FieldKind, input: FieldInput) -> Option<Self> {
        match (kind.is_numeric(), input) {
            (_, FieldInput::Unset) => None,
            (true, FieldInput::Text(raw)) => Some(ConfigValue::Number(coerce_number(&raw))),
            (true, FieldInput::Toggle(on)) => Some(ConfigValue::Number(if on { 1.0 } else { 0.0 })),
            (false, FieldInput::Text(raw)) => Some(ConfigValue::Text(raw)),
            (false, FieldInput::Toggle(on)) => Some(ConfigValue::Bool(on)),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Numbers compare by value with NaN equal to itself, so replayed states
/// compare equal.
impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConfigValue::Text(a), ConfigValue::Text(b)) => a == b,
            (ConfigValue::Number(a), ConfigValue::Number(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (ConfigValue::Bool(a), ConfigValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            ConfigValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            ConfigValue::Number(n) => match json_integer(*n) {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", n),
            },
        }
    }
}

/// JSON number rules: integral values are integers, non-finite values are null.
impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Text(s) => serializer.serialize_str(s),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Number(n) if !n.is_finite() => serializer.serialize_none(),
            ConfigValue::Number(n) => match json_integer(*n) {
                Some(i) => serializer.serialize_i128(i),
                None => serializer.serialize_f64(*n),
            },
        }
    }
}

/// The integer a JavaScript number prints as: the shortest round-trip digits,
/// zero-padded, so `2^64` becomes `18446744073709552000`.
fn json_integer(n: f64) -> Option<i128> {
    if !n.is_finite() || n.fract() != 0.0 || n.abs() >= MAX_JSON_INTEGER {
        return None;
    }
    // f64 Display prints whole numbers without exponent or fraction
    format!("{}", n).parse().ok().or(Some(n as i128))
}

/// Change payload produced by one edit. `Unset` removes the key.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Toggle(bool),
    Unset,
}

/// Sparse set of explicitly set parameters. A key is present iff the user
/// set it and has not cleared it since. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigState {
    values: IndexMap<String, ConfigValue>,
}

impl ConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after one edit; `self` is left untouched.
    ///
    /// Numeric kinds coerce text input to a number (NaN when unparsable),
    /// other kinds store the input as given. Re-setting a key keeps its
    /// position.
    pub fn apply_change(&self, schema: &EngineSchema, name: &str, input: FieldInput) -> Self {
        let mut next = self.clone();

        if input == FieldInput::Unset {
            next.values.shift_remove(name);
            return next;
        }

        let Some(descriptor) = schema.field(name) else {
            debug_assert!(
                false,
                "field '{}' is not part of the {} schema",
                name,
                schema.engine()
            );
            return next;
        };

        if let Some(value) = ConfigValue::from_input(&descriptor.kind, input) {
            next.values.insert(name.to_string(), value);
        }
        next
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Converts user text to a number the way a JavaScript `Number(text)` call
/// does: surrounding whitespace is ignored, empty text is zero, `0x`/`0o`/`0b`
/// prefixes and `Infinity` are accepted, anything else unparsable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix_value) = parse_prefixed_integer(s) {
        return radix_value;
    }

    let is_decimal_literal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };

    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

//! A self-contained JSON codec.
//!
//! Parsing produces a [JsonValue] tree from in-memory JSON text, and
//! [formatter::Formatter] re-serializes a tree back to text with fixed-style
//! indentation. Numbers are held losslessly via [Number] so that re-formatted
//! output reproduces the precision of the original literals.
use std::fmt::{Display, Formatter};

use crate::numbers::Number;

pub mod coords;
mod decoders;
pub mod errors;
pub mod formatter;
pub mod lexer;
pub mod numbers;
pub mod parser;

pub use crate::decoders::Encoding;

/// Basic enumeration of different Json values
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// Map of values. Pairs are held in insertion order so that formatting is
    /// deterministic; keys are unique, with the last duplicate winning
    Object(Vec<(String, JsonValue)>),
    /// Array of values
    Array(Vec<JsonValue>),
    /// Canonical string value
    String(String),
    /// Numeric value, preserved losslessly
    Number(Number),
    /// Canonical boolean value
    Boolean(bool),
    /// Canonical null value
    Null,
}

impl JsonValue {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// The boolean payload, if this is a [JsonValue::Boolean]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload, if this is a [JsonValue::String]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a [JsonValue::Number]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            JsonValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The pair list, if this is a [JsonValue::Object]
    pub fn as_object(&self) -> Option<&[(String, JsonValue)]> {
        match self {
            JsonValue::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// The element list, if this is a [JsonValue::Array]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Look up the value for a key, if this is a [JsonValue::Object]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

impl Display for JsonValue {
    /// Renders the value as JSON text, via [formatter::Formatter]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::formatter::Formatter::format(self))
    }
}

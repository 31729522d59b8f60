//! Schema-checked view of the input mapping and the doubling rules

use std::fmt;

use serde::{Serialize, Serializer};
use serde_yaml::Value;

use super::error::DoubleError;

/// Key read from the input mapping and written to the output mapping
pub const KEY: &str = "x";

/// A YAML numeric scalar, keeping the integer/float distinction from the parser.
///
/// Integers are held as `i128`, wide enough for any `i64` or `u64` the parser
/// produces and for its double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Multiply by two using the native semantics of the variant.
    ///
    /// Integers stay integers and floats follow IEEE arithmetic, so infinities
    /// and NaN pass through. Only an integer already outside the 64-bit range
    /// can overflow.
    pub fn doubled(self) -> Result<Number, DoubleError> {
        match self {
            Number::Int(v) => v
                .checked_mul(2)
                .map(Number::Int)
                .ok_or_else(|| DoubleError::IntegerOverflow {
                    value: v.to_string(),
                }),
            Number::Float(v) => Ok(Number::Float(v * 2.0)),
        }
    }

    fn from_yaml(n: &serde_yaml::Number) -> Option<Number> {
        if n.is_f64() {
            return n.as_f64().map(Number::Float);
        }
        n.as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .map(Number::Int)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" so floats never read as integers
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(v) => serializer.serialize_i128(v),
            Number::Float(v) => serializer.serialize_f64(v),
        }
    }
}

/// The only part of the input document that is carried to the output.
///
/// Serializes as a mapping with exactly one key, `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    pub x: Number,
}

impl Record {
    pub fn new(x: Number) -> Self {
        Self { x }
    }

    /// Check the shape of a parsed document and extract `x`.
    ///
    /// The top level must be a mapping holding a numeric `x`. Other keys are
    /// ignored. Tagged values are never resolved, so they fail the check like
    /// any other non-number.
    pub fn from_value(value: &Value) -> Result<Self, DoubleError> {
        let mapping = match value {
            Value::Mapping(m) => m,
            other => {
                return Err(DoubleError::NotAMapping {
                    found: describe(other),
                })
            }
        };

        let raw = mapping.get(KEY).ok_or_else(|| DoubleError::MissingKey {
            key: KEY.to_string(),
        })?;

        let number = match raw {
            Value::Number(n) => Number::from_yaml(n),
            _ => None,
        }
        .ok_or_else(|| DoubleError::NotNumeric {
            key: KEY.to_string(),
            found: describe(raw),
        })?;

        Ok(Self::new(number))
    }

    /// Replace `x` with twice its value.
    pub fn double(&mut self) -> Result<(), DoubleError> {
        self.x = self.x.doubled()?;
        Ok(())
    }

    /// Render the record as a YAML document.
    pub fn to_yaml_string(&self) -> Result<String, DoubleError> {
        serde_yaml::to_string(self).map_err(DoubleError::Serialize)
    }
}

/// Human-readable kind of a YAML node, for error messages
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

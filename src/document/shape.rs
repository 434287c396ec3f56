//! Shape inspection for configuration values.

use serde_json::Value;
use std::fmt;

/// Structural kind of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Mapping,
    Sequence,
    Scalar,
    Null,
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Shape::Mapping,
            Value::Array(_) => Shape::Sequence,
            Value::Null => Shape::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }

    /// Mappings and sequences; the shapes a merge descends into.
    pub fn is_structural(self) -> bool {
        matches!(self, Shape::Mapping | Shape::Sequence)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Mapping => "mapping",
            Shape::Sequence => "sequence",
            Shape::Scalar => "scalar",
            Shape::Null => "null",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

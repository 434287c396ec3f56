//! Configuration documents
//!
//! A CloudWatch agent configuration is a JSON object whose values are scalars,
//! sequences, or nested mappings. [`Configuration`] wraps the root mapping so the
//! merger only ever sees well-formed roots; key order is preserved from input to
//! output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod io;
mod shape;

pub use io::{load, write};
pub use shape::Shape;

/// Top-level key of the metrics region.
pub const METRICS: &str = "metrics";

/// Root of a configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    root: Map<String, Value>,
}

impl Configuration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. The root must be an object.
    pub fn parse(text: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Self::try_from(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.root.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Insert a top-level section, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.root.insert(key.into(), value)
    }

    /// Top-level sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root.iter()
    }

    /// The `metrics` region, if present.
    pub fn metrics(&self) -> Option<&Value> {
        self.root.get(METRICS)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Render as JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.root)
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

impl TryFrom<Value> for Configuration {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(format!(
                "top-level value must be an object, found a {}",
                Shape::of(&other)
            )),
        }
    }
}

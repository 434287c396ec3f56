//! Union helpers: first input wins on collisions, nothing is dropped or duplicated.

use super::MergeContext;
use crate::document::Shape;
use crate::error::MergeError;
use serde_json::{Map, Value};
use tracing::trace;

/// Value equality where numbers compare numerically, so `60` and `60.0` match.
pub(crate) fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| same_value(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, a)| y.get(key).map_or(false, |b| same_value(a, b)))
        }
        _ => a == b,
    }
}

/// Append each item of `other` not already in `base`, in `other`'s order.
/// Existing order in `base` is untouched.
pub(crate) fn append_missing(base: &mut Vec<Value>, other: &[Value]) -> usize {
    let mut added = 0;
    for item in other {
        if !base.iter().any(|existing| same_value(existing, item)) {
            base.push(item.clone());
            added += 1;
        }
    }
    added
}

/// Add keys from `other` that `base` lacks. Values already in `base` are kept as-is.
pub(crate) fn union_keys(base: &mut Map<String, Value>, other: &Map<String, Value>) {
    for (key, value) in other {
        if !base.contains_key(key) {
            base.insert(key.clone(), value.clone());
        }
    }
}

/// Union two values found at the same `path`.
///
/// Mappings are unioned key by key (recursively), sequences gain the items they
/// lack, and scalars keep the base value. A mapping or sequence facing a value of
/// another shape is a shape conflict.
pub(crate) fn union_value(
    base: &mut Value,
    other: &Value,
    path: &str,
    ctx: &mut MergeContext,
) -> Result<(), MergeError> {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_value) in other_map {
                match base_map.get_mut(key) {
                    Some(base_value) => {
                        let child = format!("{}.{}", path, key);
                        union_value(base_value, other_value, &child, ctx)?;
                    }
                    None => {
                        base_map.insert(key.clone(), other_value.clone());
                    }
                }
            }
            Ok(())
        }
        (Value::Array(base_items), Value::Array(other_items)) => {
            let added = append_missing(base_items, other_items);
            trace!(path = %path, added, "Unioned sequence");
            Ok(())
        }
        (base, other) if Shape::of(base).is_structural() || Shape::of(other).is_structural() => {
            ctx.shape_conflict(path, base, other)
        }
        _ => Ok(()),
    }
}

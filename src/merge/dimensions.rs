//! aggregation_dimensions: a list of dimension-name sets compared by sorted contents.

use serde_json::Value;

/// Order-insensitive identity of one aggregation entry.
#[derive(Debug, PartialEq)]
enum DimensionSet {
    /// Sorted canonical JSON of each member.
    Names(Vec<String>),
    /// Entry that is not a list; compared as-is.
    Opaque(Value),
}

impl DimensionSet {
    fn of(entry: &Value) -> Self {
        match entry {
            Value::Array(names) => {
                let mut names: Vec<String> = names.iter().map(Value::to_string).collect();
                names.sort_unstable();
                DimensionSet::Names(names)
            }
            other => DimensionSet::Opaque(other.clone()),
        }
    }
}

/// Append every set from `other` whose sorted form is not yet in `base`.
/// Members inside a set keep their original order.
pub(crate) fn append_missing_sets(base: &mut Vec<Value>, other: &[Value]) -> usize {
    let mut seen: Vec<DimensionSet> = base.iter().map(DimensionSet::of).collect();
    let mut added = 0;
    for entry in other {
        let key = DimensionSet::of(entry);
        if !seen.contains(&key) {
            seen.push(key);
            base.push(entry.clone());
            added += 1;
        }
    }
    added
}

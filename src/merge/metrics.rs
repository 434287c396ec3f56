//! The `metrics` region: namespace, metrics_collected, append_dimensions and
//! aggregation_dimensions each follow their own policy; any other key is first-wins.

use super::dimensions::append_missing_sets;
use super::union::{same_value, union_keys, union_value};
use super::{MergeContext, MergeDiagnostic};
use crate::document::METRICS;
use crate::error::MergeError;
use serde_json::Value;
use tracing::debug;

const NAMESPACE: &str = "namespace";
const METRICS_COLLECTED: &str = "metrics_collected";
const APPEND_DIMENSIONS: &str = "append_dimensions";
const AGGREGATION_DIMENSIONS: &str = "aggregation_dimensions";

/// Merge `other` into `base`, both taken from the `metrics` key.
pub(crate) fn merge_metrics(
    base: &mut Value,
    other: &Value,
    ctx: &mut MergeContext,
) -> Result<(), MergeError> {
    let (base, other) = match (base, other) {
        (Value::Object(base), Value::Object(other)) => (base, other),
        (base, other) => return ctx.shape_conflict(METRICS, base, other),
    };

    for (key, other_value) in other {
        match base.get_mut(key) {
            Some(base_value) => match key.as_str() {
                NAMESPACE => check_namespace(base_value, other_value, ctx),
                METRICS_COLLECTED => merge_collected(base_value, other_value, ctx)?,
                APPEND_DIMENSIONS => merge_append_dimensions(base_value, other_value, ctx)?,
                AGGREGATION_DIMENSIONS => {
                    merge_aggregation_dimensions(base_value, other_value, ctx)?
                }
                _ => {}
            },
            None => {
                debug!(key = %key, "Adding metrics key from second config");
                base.insert(key.clone(), other_value.clone());
            }
        }
    }

    Ok(())
}

/// CloudWatch agent supports a single namespace; the first one stays.
fn check_namespace(base: &Value, other: &Value, ctx: &mut MergeContext) {
    if same_value(base, other) {
        return;
    }
    let retained = display_scalar(base);
    let discarded = display_scalar(other);
    debug!(retained = %retained, discarded = %discarded, "Different namespaces found");
    ctx.record(MergeDiagnostic::NamespaceConflict {
        retained,
        discarded,
    });
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn merge_collected(
    base: &mut Value,
    other: &Value,
    ctx: &mut MergeContext,
) -> Result<(), MergeError> {
    let (base, other) = match (base, other) {
        (Value::Object(base), Value::Object(other)) => (base, other),
        (base, other) => return ctx.shape_conflict(&path(METRICS_COLLECTED), base, other),
    };

    for (category, other_metrics) in other {
        match base.get_mut(category) {
            Some(base_metrics) => {
                let category_path = format!("{}.{}", path(METRICS_COLLECTED), category);
                union_value(base_metrics, other_metrics, &category_path, ctx)?;
            }
            None => {
                debug!(category = %category, "Adding metric category from second config");
                base.insert(category.clone(), other_metrics.clone());
            }
        }
    }
    Ok(())
}

fn merge_append_dimensions(
    base: &mut Value,
    other: &Value,
    ctx: &mut MergeContext,
) -> Result<(), MergeError> {
    match (base, other) {
        (Value::Object(base), Value::Object(other)) => {
            union_keys(base, other);
            Ok(())
        }
        (base, other) => ctx.shape_conflict(&path(APPEND_DIMENSIONS), base, other),
    }
}

fn merge_aggregation_dimensions(
    base: &mut Value,
    other: &Value,
    ctx: &mut MergeContext,
) -> Result<(), MergeError> {
    match (base, other) {
        (Value::Array(base), Value::Array(other)) => {
            let added = append_missing_sets(base, other);
            debug!(added, "Merged aggregation dimensions");
            Ok(())
        }
        (base, other) => ctx.shape_conflict(&path(AGGREGATION_DIMENSIONS), base, other),
    }
}

fn path(key: &str) -> String {
    format!("{}.{}", METRICS, key)
}

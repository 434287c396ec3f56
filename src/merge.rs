//! Config Merger
//!
//! Combines two CloudWatch agent configurations into one that keeps every distinct
//! metric category, dimension and setting from both inputs without duplicating
//! anything. The first input is authoritative wherever only one value can survive.
//!
//! Inputs are borrowed immutably; the result is built from an owned copy of the
//! first input, so neither argument is ever modified.

use crate::document::{Configuration, Shape, METRICS};
use crate::error::MergeError;
use serde_json::Value;
use tracing::debug;

mod diagnostic;
mod dimensions;
mod metrics;
mod policy;
mod union;

pub use diagnostic::MergeDiagnostic;
pub use policy::{MergeOptions, ShapeConflictPolicy};

/// Result of a merge: the combined configuration plus anything worth reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub config: Configuration,
    pub diagnostics: Vec<MergeDiagnostic>,
}

impl MergeOutcome {
    /// True when the merge resolved no conflicts.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Merge `second` into `first`, keeping the first value on every shape conflict.
/// Never fails.
pub fn merge(first: &Configuration, second: &Configuration) -> MergeOutcome {
    let options = MergeOptions {
        shape_conflict: ShapeConflictPolicy::KeepFirst,
    };
    match merge_with(first, second, &options) {
        Ok(outcome) => outcome,
        Err(e) => unreachable!("keep-first merge raised an error: {}", e),
    }
}

/// Merge `second` into `first`, failing only when `options` ask for strict shape checks.
pub fn merge_with(
    first: &Configuration,
    second: &Configuration,
    options: &MergeOptions,
) -> Result<MergeOutcome, MergeError> {
    let mut ctx = MergeContext::new(options.shape_conflict);
    let config = merge_into(first, second, &mut ctx)?;
    Ok(ctx.finish(config))
}

fn merge_into(
    first: &Configuration,
    second: &Configuration,
    ctx: &mut MergeContext,
) -> Result<Configuration, MergeError> {
    let mut merged = first.clone();

    if let Some(other) = second.metrics() {
        match merged.get_mut(METRICS) {
            Some(base) => metrics::merge_metrics(base, other, ctx)?,
            None => {
                debug!("First config has no metrics region; taking it from second config");
                merged.insert(METRICS, other.clone());
            }
        }
    }

    // Unrecognised sections are opaque: first wins, no deep merge.
    for (section, value) in second.sections() {
        if section != METRICS && !merged.contains_key(section) {
            debug!(section = %section, "Adding section from second config");
            merged.insert(section.clone(), value.clone());
        }
    }

    Ok(merged)
}

/// Shared state threaded through the merge steps.
pub(crate) struct MergeContext {
    policy: ShapeConflictPolicy,
    diagnostics: Vec<MergeDiagnostic>,
}

impl MergeContext {
    fn new(policy: ShapeConflictPolicy) -> Self {
        Self {
            policy,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, diagnostic: MergeDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Resolve a shape mismatch at `path` according to the policy.
    /// The caller has already left `kept` in place.
    pub(crate) fn shape_conflict(
        &mut self,
        path: &str,
        kept: &Value,
        discarded: &Value,
    ) -> Result<(), MergeError> {
        let (kept, discarded) = (Shape::of(kept), Shape::of(discarded));
        // `Fail` is the only arm that returns an error; `merge` depends on it.
        match self.policy {
            ShapeConflictPolicy::Fail => Err(MergeError::ShapeConflict {
                path: path.to_string(),
                first: kept.as_str(),
                second: discarded.as_str(),
            }),
            ShapeConflictPolicy::KeepFirst => {
                debug!(path = %path, kept = %kept, discarded = %discarded, "Shape conflict");
                self.record(MergeDiagnostic::ShapeConflict {
                    path: path.to_string(),
                    kept,
                    discarded,
                });
                Ok(())
            }
        }
    }

    fn finish(self, config: Configuration) -> MergeOutcome {
        MergeOutcome {
            config,
            diagnostics: self.diagnostics,
        }
    }
}

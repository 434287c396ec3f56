//! Merge options: how structural conflicts are handled.

use serde::{Deserialize, Serialize};

/// What to do when the same path holds a mapping on one side and something else on the other.
///
/// `Fail` is the only variant that makes a merge return an error. Any new variant
/// must resolve conflicts without failing, since [`crate::merge::merge`] promises
/// not to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeConflictPolicy {
    /// Keep the first input's value and record a diagnostic.
    #[default]
    KeepFirst,
    /// Abort the merge with an error.
    Fail,
}

/// Options accepted by [`crate::merge::merge_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    #[serde(default)]
    pub shape_conflict: ShapeConflictPolicy,
}

impl MergeOptions {
    /// Options that turn every shape conflict into an error.
    pub fn strict() -> Self {
        Self {
            shape_conflict: ShapeConflictPolicy::Fail,
        }
    }
}

//! Non-fatal findings recorded while merging.

use crate::document::Shape;
use std::fmt;

/// A condition the merge resolved on its own but the caller should surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDiagnostic {
    /// Both inputs declare `metrics.namespace` with different values.
    NamespaceConflict { retained: String, discarded: String },

    /// The same path holds values of different shapes; the first input's value was kept.
    ShapeConflict {
        path: String,
        kept: Shape,
        discarded: Shape,
    },
}

impl fmt::Display for MergeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeDiagnostic::NamespaceConflict { retained, .. } => write!(
                f,
                "Different namespaces found. Using '{}' from first config.",
                retained
            ),
            MergeDiagnostic::ShapeConflict {
                path,
                kept,
                discarded,
            } => write!(
                f,
                "Structural conflict at '{}': keeping {} from first config, discarding {} from second config.",
                path, kept, discarded
            ),
        }
    }
}

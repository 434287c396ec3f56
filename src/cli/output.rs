//! CLI output: error and diagnostic rendering for the terminal.

use crate::error::ApiError;
use crate::merge::MergeDiagnostic;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("Error: {}", e)
}

/// Render a merge diagnostic as a warning line.
pub fn format_diagnostic(diagnostic: &MergeDiagnostic) -> String {
    format!("Warning: {}", diagnostic)
}

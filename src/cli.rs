//! CLI domain: parse, route and output only.
//! Merge semantics live in [`crate::merge`]; this layer wires files, settings and the terminal.

mod output;
mod parse;
mod route;

pub use output::{format_diagnostic, map_error};
pub use parse::Cli;
pub use route::{load_settings, MergeReport, MergeRequest, RunContext};

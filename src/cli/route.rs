//! CLI route: run context for a single merge. Loads both documents, merges them and
//! writes (or prints) the result.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, MergerConfig};
use crate::document;
use crate::error::ApiError;
use crate::merge::{merge_with, MergeDiagnostic, MergeOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load tool settings from an explicit file or the default sources.
pub fn load_settings(config_path: Option<&Path>) -> Result<MergerConfig, ApiError> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Paths and switches for one merge run.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
}

impl From<&Cli> for MergeRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            first: cli.config1.clone(),
            second: cli.config2.clone(),
            output: cli.output.clone(),
            dry_run: cli.dry_run,
        }
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct MergeReport {
    /// Text for stdout: the success message, or the merged document on a dry run.
    pub output: String,
    /// Warnings for stderr.
    pub diagnostics: Vec<MergeDiagnostic>,
}

/// Runtime context for CLI execution: resolved merge options.
pub struct RunContext {
    options: MergeOptions,
}

impl RunContext {
    /// Create run context from loaded settings. `strict` overrides the settings' policy.
    pub fn new(settings: &MergerConfig, strict: bool) -> Self {
        let options = if strict {
            MergeOptions::strict()
        } else {
            settings.merge.clone()
        };
        Self { options }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Load, merge and write.
    pub fn execute(&self, request: &MergeRequest) -> Result<MergeReport, ApiError> {
        info!(
            first = %request.first.display(),
            second = %request.second.display(),
            "Merging configurations"
        );

        let first = document::load(&request.first)?;
        let second = document::load(&request.second)?;

        let outcome = merge_with(&first, &second, &self.options)?;
        debug!(
            diagnostics = outcome.diagnostics.len(),
            sections = outcome.config.as_map().len(),
            "Merge complete"
        );

        let output = if request.dry_run {
            outcome.config.to_pretty_json().map_err(|e| {
                ApiError::ConfigError(format!("Failed to render merged configuration: {}", e))
            })?
        } else {
            document::write(&outcome.config, &request.output)?;
            info!(output = %request.output.display(), "Merged configuration written");
            format!(
                "Merged configuration written to {}",
                request.output.display()
            )
        };

        Ok(MergeReport {
            output,
            diagnostics: outcome.diagnostics,
        })
    }
}

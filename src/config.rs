//! Configuration System
//!
//! Tool settings for the merger: how shape conflicts are resolved and how logging is
//! set up. Settings are layered with the `config` crate (defaults, global file,
//! explicit `--config` file, `CWMERGE_` environment) and validated before use.

use crate::logging::LoggingConfig;
use crate::merge::MergeOptions;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: &[&str] = &["text", "json"];
const LOG_OUTPUTS: &[&str] = &["stdout", "stderr", "file", "both"];

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergerConfig {
    /// Merge behaviour
    #[serde(default)]
    pub merge: MergeOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MergerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let logging = &self.logging;

        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown level '{}' (expected one of {})",
                logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown format '{}' (expected one of {})",
                logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        if !LOG_OUTPUTS.contains(&logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown output '{}' (expected one of {})",
                logging.output,
                LOG_OUTPUTS.join(", ")
            )));
        }
        for (module, level) in &logging.modules {
            if !LOG_LEVELS.contains(&level.as_str()) {
                errors.push(ValidationError::Logging(format!(
                    "Unknown level '{}' for module '{}'",
                    level, module
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

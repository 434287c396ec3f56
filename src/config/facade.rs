//! ConfigLoader: builds [`MergerConfig`] from every settings source in order.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file};
use super::MergerConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;
use tracing::debug;

/// Loads tool settings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from defaults, the global file and the environment.
    pub fn load() -> Result<MergerConfig, ApiError> {
        let builder = global_file::add_to_builder(builder_with_defaults()?)?;
        Self::finish(builder)
    }

    /// Like [`ConfigLoader::load`], with `path` layered above the global file.
    /// The file must exist; its format follows its extension.
    pub fn load_from_file(path: &Path) -> Result<MergerConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = global_file::add_to_builder(builder_with_defaults()?)?
            .add_source(File::from(path).required(true));
        debug!(config_path = %path.display(), "Using explicit configuration file");
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<MergerConfig, ApiError> {
        let config: MergerConfig = environment::add_to_builder(builder)
            .build()?
            .try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }
}

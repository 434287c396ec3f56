//! Loader and writer for configuration files.

use super::Configuration;
use crate::error::DocumentError;
use std::path::Path;
use tracing::debug;

/// Load a configuration file.
///
/// Any read failure (missing file, permissions, directory) maps to
/// [`DocumentError::NotFound`]; content that is not UTF-8 text holding a JSON
/// object maps to [`DocumentError::MalformedInput`].
pub fn load(path: &Path) -> Result<Configuration, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let malformed = |reason: String| DocumentError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    };
    let text = String::from_utf8(bytes).map_err(|e| malformed(e.to_string()))?;
    let config = Configuration::parse(&text).map_err(malformed)?;

    debug!(
        path = %path.display(),
        sections = config.as_map().len(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Write a configuration as pretty-printed JSON.
pub fn write(config: &Configuration, path: &Path) -> Result<(), DocumentError> {
    let text = config.to_pretty_json().map_err(|e| DocumentError::WriteFailure {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;

    std::fs::write(path, text).map_err(|source| DocumentError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Wrote configuration");
    Ok(())
}

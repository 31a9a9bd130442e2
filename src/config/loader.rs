//! Tagger config loading.

use std::fs;
use std::path::Path;

use crate::config::schema::TaggerConfig;
use crate::error::{PromiseStateError, Result};

/// Load a config file and parse it into TaggerConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TaggerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PromiseStateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PromiseStateError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!("Loaded tagger config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Parse YAML content into TaggerConfig.
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<TaggerConfig> {
    if content.trim().is_empty() {
        return Ok(TaggerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PromiseStateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<TaggerConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(TaggerConfig::default()),
    }
}

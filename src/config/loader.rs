//! Loader for the motion RON config at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{MotionConfig, SCHEMA_VERSION};

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a motion config from RON text. `source` names it in errors.
pub fn parse_motion_config(source: &str, contents: &str) -> Result<MotionConfig, ConfigLoadError> {
    let config: MotionConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if config.schema_version != SCHEMA_VERSION {
        return Err(ConfigLoadError {
            file: source.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                config.schema_version, SCHEMA_VERSION
            ),
        });
    }

    Ok(config)
}

/// Load the motion config file from disk.
pub fn load_motion_config(path: &Path) -> Result<MotionConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_motion_config(&file_name, &contents)
}

//! Config domain: loading and validating motion tunables.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{MotionConfig, SCHEMA_VERSION};
pub use loader::{ConfigLoadError, load_motion_config, parse_motion_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/data/motion.ron";

/// Load, validate and fall back to defaults on any failure.
pub fn resolve_motion_config(path: &Path) -> MotionConfig {
    let config = match load_motion_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using built-in motion defaults", e);
            return MotionConfig::default();
        }
    };

    let errors = validate_config(&config);
    if errors.is_empty() {
        info!(
            "Loaded motion config from {} ({} Hz)",
            path.display(),
            config.tick_rate_hz
        );
        config
    } else {
        for error in &errors {
            error!("{}: {}", path.display(), error);
        }
        warn!(
            "{} invalid motion tunable(s); using built-in motion defaults",
            errors.len()
        );
        MotionConfig::default()
    }
}

pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = resolve_motion_config(&self.path);
        app.insert_resource(Time::<Fixed>::from_hz(config.tick_rate_hz))
            .insert_resource(config.input)
            .insert_resource(config.tuning);
    }
}

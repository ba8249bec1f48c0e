//! Serialized shape of `assets/data/motion.ron`.

use serde::{Deserialize, Serialize};

use crate::motion::{InputSettings, MotionTuning};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MotionConfig {
    pub schema_version: u32,
    /// Fixed simulation rate in ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f64,
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub tuning: MotionTuning,
}

fn default_tick_rate() -> f64 {
    50.0
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tick_rate_hz: default_tick_rate(),
            input: InputSettings::default(),
            tuning: MotionTuning::default(),
        }
    }
}

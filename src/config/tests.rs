//! Config domain: tests for RON parsing and tunable validation.

use std::path::Path;

use super::{
    MotionConfig, load_motion_config, parse_motion_config, resolve_motion_config, validate_config,
};
use crate::motion::MotionTuning;

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/motion.ron");

#[test]
fn test_shipped_config_parses_and_validates() {
    let config = parse_motion_config("motion.ron", SHIPPED_CONFIG).expect("shipped config parses");
    assert!(validate_config(&config).is_empty());
    assert_eq!(config.tuning, MotionTuning::default());
    assert_eq!(config.tick_rate_hz, 50.0);
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = parse_motion_config("inline", "(schema_version: 1, tuning: (jump_power: 20.0))")
        .expect("partial config parses");
    assert_eq!(config.tuning.jump_power, 20.0);
    assert_eq!(config.tuning.max_speed, MotionTuning::default().max_speed);
    assert!(config.input.snap_input);
}

#[test]
fn test_parse_error_names_source() {
    let err = parse_motion_config("broken.ron", "(schema_version: ").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_schema_version_mismatch_is_rejected() {
    let err = parse_motion_config("old.ron", "(schema_version: 0)").unwrap_err();
    assert!(err.message.contains("schema_version"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_motion_config(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = resolve_motion_config(Path::new("does/not/exist.ron"));
    assert_eq!(config, MotionConfig::default());
}

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&MotionConfig::default()).is_empty());
}

#[test]
fn test_validation_reports_each_bad_field() {
    let mut config = MotionConfig::default();
    config.tuning.max_speed = 0.0;
    config.tuning.grounding_force = 1.5;
    config.tuning.tether_slack_ratio = 1.2;
    config.tuning.fall_acceleration = f32::NAN;

    let fields: Vec<_> = validate_config(&config).iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "max_speed",
            "fall_acceleration",
            "grounding_force",
            "tether_slack_ratio"
        ]
    );
}

#[test]
fn test_zero_grace_windows_are_allowed() {
    let mut config = MotionConfig::default();
    config.tuning.coyote_time = 0.0;
    config.tuning.jump_buffer = 0.0;
    assert!(validate_config(&config).is_empty());
}

//! Range validation for motion tunables.

use super::data::MotionConfig;

/// A tunable that is out of its accepted range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} is invalid: {}", self.field, self.value, self.reason)
    }
}

/// Helper macro for checking a value against a predicate
macro_rules! check {
    ($errors:expr, $field:literal, $value:expr, $ok:expr, $reason:literal) => {
        let value = $value as f64;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                reason: $reason,
            });
        }
    };
}

fn positive(v: f64) -> bool {
    v > 0.0
}

fn non_negative(v: f64) -> bool {
    v >= 0.0
}

/// Validate all tunables in a config.
/// Returns a list of validation errors, empty if every value is in range.
pub fn validate_config(config: &MotionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let t = &config.tuning;

    check!(errors, "tick_rate_hz", config.tick_rate_hz, positive, "must be positive");

    // Rates and speeds
    check!(errors, "max_speed", t.max_speed, positive, "must be positive");
    check!(errors, "acceleration", t.acceleration, positive, "must be positive");
    check!(errors, "ground_deceleration", t.ground_deceleration, positive, "must be positive");
    check!(errors, "air_deceleration", t.air_deceleration, positive, "must be positive");
    check!(errors, "jump_power", t.jump_power, positive, "must be positive");
    check!(errors, "max_fall_speed", t.max_fall_speed, positive, "must be positive");
    check!(errors, "fall_acceleration", t.fall_acceleration, positive, "must be positive");
    check!(errors, "boost_force", t.boost_force, non_negative, "must not be negative");
    check!(
        errors,
        "jump_end_early_gravity_modifier",
        t.jump_end_early_gravity_modifier,
        |v: f64| v >= 1.0,
        "must be at least 1"
    );
    check!(
        errors,
        "grounding_force",
        t.grounding_force,
        |v: f64| v < 0.0,
        "must be negative to keep the character seated"
    );

    // Distances and windows
    check!(errors, "grounder_distance", t.grounder_distance, positive, "must be positive");
    check!(errors, "grapple_max_distance", t.grapple_max_distance, positive, "must be positive");
    check!(errors, "coyote_time", t.coyote_time, non_negative, "must not be negative");
    check!(errors, "jump_buffer", t.jump_buffer, non_negative, "must not be negative");
    check!(
        errors,
        "tether_slack_ratio",
        t.tether_slack_ratio,
        |v: f64| v > 0.0 && v <= 1.0,
        "must be in (0, 1]"
    );
    check!(
        errors,
        "tether_correction",
        t.tether_correction,
        |v: f64| (0.0..=1.0).contains(&v),
        "must be in [0, 1]"
    );

    // Input
    let input = &config.input;
    check!(
        errors,
        "horizontal_dead_zone",
        input.horizontal_dead_zone,
        |v: f64| (0.0..1.0).contains(&v),
        "must be in [0, 1)"
    );
    check!(
        errors,
        "vertical_dead_zone",
        input.vertical_dead_zone,
        |v: f64| (0.0..1.0).contains(&v),
        "must be in [0, 1)"
    );

    errors
}

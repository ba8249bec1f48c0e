//! Horizontal acceleration curves and gravity.

use crate::motion::MotionTuning;

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// What the horizontal step should do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalMode {
    Decelerate,
    Boost,
    Accelerate,
    /// Attached but not boosting: the tether owns horizontal motion.
    Tethered,
}

pub fn horizontal_mode(input_x: f32, attached: bool, boost_usable: bool) -> HorizontalMode {
    if input_x == 0.0 {
        HorizontalMode::Decelerate
    } else if attached && boost_usable {
        HorizontalMode::Boost
    } else if !attached {
        HorizontalMode::Accelerate
    } else {
        HorizontalMode::Tethered
    }
}

pub fn decelerate(vx: f32, grounded: bool, dt: f32, tuning: &MotionTuning) -> f32 {
    let rate = if grounded {
        tuning.ground_deceleration
    } else {
        tuning.air_deceleration
    };
    approach(vx, 0.0, rate * dt)
}

pub fn accelerate(vx: f32, input_x: f32, dt: f32, tuning: &MotionTuning) -> f32 {
    approach(vx, input_x * tuning.max_speed, tuning.acceleration * dt)
}

pub fn apply_gravity(
    vy: f32,
    grounded: bool,
    ended_jump_early: bool,
    dt: f32,
    tuning: &MotionTuning,
) -> f32 {
    if grounded && vy <= 0.0 {
        return tuning.grounding_force;
    }

    let mut gravity = tuning.fall_acceleration;
    if ended_jump_early && vy > 0.0 {
        gravity *= tuning.jump_end_early_gravity_modifier;
    }
    approach(vy, -tuning.max_fall_speed, gravity * dt)
}

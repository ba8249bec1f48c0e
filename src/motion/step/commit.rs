//! Tether enforcement on the final velocity before it is committed.

use bevy::prelude::*;

use crate::motion::TetherConstraint;

/// Constrain `velocity` so the body does not extend past the tether.
///
/// The tether never pulls the body while it is inside `max_length`. When
/// `shrink_allowed`, the length tracks the body while it stands on the ground
/// and only follows it inward once airborne.
pub fn constrain_to_tether(
    tether: &mut TetherConstraint,
    position: Vec2,
    velocity: Vec2,
    grounded: bool,
    dt: f32,
    correction: f32,
) -> Vec2 {
    let offset = position - tether.anchor;
    let distance = offset.length();

    if tether.shrink_allowed {
        if grounded {
            tether.max_length = distance;
            return velocity;
        }
        tether.max_length = tether.max_length.min(distance);
    }

    let Some(outward) = offset.try_normalize() else {
        return velocity;
    };
    if distance < tether.max_length {
        return velocity;
    }

    // Outward radial speed is removed; an overshoot asks for a bounded inward
    // speed, which is kept if the body already moves inward faster.
    let radial_speed = velocity.dot(outward);
    let overshoot = distance - tether.max_length;
    let target = if dt > 0.0 {
        -(overshoot / dt * correction)
    } else {
        0.0
    };
    velocity + outward * (radial_speed.min(target) - radial_speed)
}

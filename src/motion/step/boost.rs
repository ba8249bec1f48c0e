//! Boost arming and the tangential swing impulse.

use bevy::prelude::*;

use crate::motion::{BoostState, CueCommand, GrappleState, MotionTuning, TickOutbox};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoostInput {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
}

/// Arm on a press edge while attached, disarm on release.
pub fn update_arming(
    boost: &mut BoostState,
    grapple: &GrappleState,
    input: BoostInput,
    outbox: &mut TickOutbox,
) {
    if input.pressed && grapple.attached && !boost.usable {
        boost.usable = true;
        debug!("Boost armed");
    }

    if input.released {
        if boost.active {
            outbox.cue(CueCommand::BoostStop);
        }
        boost.usable = false;
        boost.active = false;
    }
}

/// Direction perpendicular to the tether, turned toward `input_x`.
pub fn swing_normal(position: Vec2, anchor: Vec2, input_x: f32) -> Option<Vec2> {
    let tether = (anchor - position).try_normalize()?;
    let normal = if input_x > 0.0 {
        Vec2::new(tether.y, -tether.x)
    } else {
        Vec2::new(-tether.y, tether.x)
    };
    Some(normal)
}

/// Try to fire the boost. Returns the impulse to apply to the body.
pub fn activate(
    boost: &mut BoostState,
    grapple: &GrappleState,
    position: Vec2,
    input_x: f32,
    held: bool,
    tuning: &MotionTuning,
    outbox: &mut TickOutbox,
) -> Option<Vec2> {
    if !grapple.attached || !boost.usable || !held || input_x == 0.0 {
        return None;
    }
    if tuning.boost_once_per_attachment && boost.fired_this_attachment {
        return None;
    }

    let anchor = grapple.anchor()?;
    let normal = swing_normal(position, anchor, input_x)?;
    let side = if position.y <= anchor.y { 1.0 } else { -1.0 };
    let impulse = normal * side * tuning.boost_force;

    outbox.cue(CueCommand::BoostPlay {
        angle: impulse.to_angle(),
    });
    boost.active = true;
    boost.fired_this_attachment = true;
    Some(impulse)
}

//! Grapple attach and detach.

use bevy::prelude::*;

use super::queries::MotionQueries;
use crate::motion::{
    BoostState, CueCommand, Facing, GrappleState, MotionNotification, MotionTuning,
    TetherConstraint, TickOutbox,
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrappleInput {
    pub pressed: bool,
    pub released: bool,
}

/// Where the grapple ray starts and which way it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub origin: Vec2,
    pub direction: Dir2,
}

impl Aim {
    /// Aim along the movement axes, or 45° up on the facing side when idle.
    pub fn from_intent(origin: Vec2, move_axes: Vec2, facing: Facing) -> Self {
        let direction = Dir2::new(move_axes)
            .unwrap_or_else(|_| Dir2::new_unchecked(Vec2::new(facing.sign(), 1.0).normalize()));
        Self { origin, direction }
    }
}

/// Run one grapple step.
///
/// The boost state is reset on detach so nothing boost-related outlives the
/// attachment that armed it.
#[allow(clippy::too_many_arguments)]
pub fn step(
    grapple: &mut GrappleState,
    boost: &mut BoostState,
    input: GrappleInput,
    aim: Aim,
    grounded: bool,
    tuning: &MotionTuning,
    queries: &impl MotionQueries,
    outbox: &mut TickOutbox,
) {
    if input.pressed && grapple.usable() {
        attach(grapple, aim, grounded, tuning, queries, outbox);
    }

    if input.released && grapple.attached {
        detach(grapple, boost, outbox);
    }
}

fn attach(
    grapple: &mut GrappleState,
    aim: Aim,
    grounded: bool,
    tuning: &MotionTuning,
    queries: &impl MotionQueries,
    outbox: &mut TickOutbox,
) {
    let hit = queries.cast_grapple(aim.origin, aim.direction, tuning.grapple_max_distance);

    if let Some(hit) = hit {
        let distance = aim.origin.distance(hit.point);
        let tether = TetherConstraint {
            anchor: hit.point,
            max_length: distance * tuning.tether_slack_ratio,
            shrink_allowed: grounded,
        };
        grapple.attached = true;
        grapple.tether = Some(tether);
        grapple.jump_locked = true;
        debug!(
            "Grapple attached: anchor={:?}, tether_length={:.2}, shrink_allowed={}",
            tether.anchor, tether.max_length, tether.shrink_allowed
        );
        outbox.cue(CueCommand::TetherSet {
            anchor: tether.anchor,
        });
    } else {
        debug!("Grapple missed: direction={:?}", aim.direction);
    }

    outbox.notify(MotionNotification::Grappled {
        attached: grapple.attached,
    });
}

fn detach(grapple: &mut GrappleState, boost: &mut BoostState, outbox: &mut TickOutbox) {
    grapple.attached = false;
    grapple.tether = None;
    grapple.jump_locked = false;
    outbox.cue(CueCommand::TetherClear);

    if boost.active {
        outbox.cue(CueCommand::BoostStop);
    }
    *boost = BoostState::default();
    debug!("Grapple released");
}

//! Ground and ceiling sensing.

use bevy::prelude::*;

use super::queries::MotionQueries;
use crate::motion::{MotionNotification, MotionState, TickOutbox};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorReadout {
    pub ground: bool,
    pub ceiling: bool,
}

/// Probe below and above the character by `probe_distance`.
pub fn probe(queries: &impl MotionQueries, probe_distance: f32) -> SensorReadout {
    SensorReadout {
        ground: queries.cast_body(Dir2::NEG_Y, probe_distance).is_some(),
        ceiling: queries.cast_body(Dir2::Y, probe_distance).is_some(),
    }
}

/// Fold a sensor readout into the motion state.
pub fn apply_readout(
    state: &mut MotionState,
    readout: SensorReadout,
    now: f32,
    outbox: &mut TickOutbox,
) {
    let impact_speed = state.velocity.y.abs();
    if readout.ceiling {
        state.velocity.y = state.velocity.y.min(0.0);
    }

    match (state.grounded, readout.ground) {
        (false, true) => {
            state.grounded = true;
            state.coyote_available = true;
            state.buffered_jump_available = true;
            state.ended_jump_early = false;
            debug!("Landed: impact_speed={:.2}", impact_speed);
            outbox.notify(MotionNotification::GroundedChanged {
                grounded: true,
                impact_speed,
            });
        }
        (true, false) => {
            state.grounded = false;
            state.last_grounded_time = now;
            debug!("Left ground at t={:.3}", now);
            outbox.notify(MotionNotification::GroundedChanged {
                grounded: false,
                impact_speed: 0.0,
            });
        }
        _ => {}
    }
}

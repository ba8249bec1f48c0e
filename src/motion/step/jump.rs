//! Jump buffering, coyote time and early release.

use bevy::prelude::*;

use crate::motion::{MotionNotification, MotionState, MotionTuning, TickOutbox};

/// Jump-relevant input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpInput {
    /// Timestamp of a jump press latched since the previous tick.
    pub pressed_at: Option<f32>,
    pub held: bool,
}

pub fn has_buffered_jump(state: &MotionState, now: f32, tuning: &MotionTuning) -> bool {
    state.buffered_jump_available && now < state.last_jump_pressed_time + tuning.jump_buffer
}

pub fn can_use_coyote(state: &MotionState, now: f32, tuning: &MotionTuning) -> bool {
    !state.grounded && state.coyote_available && now < state.last_grounded_time + tuning.coyote_time
}

/// Run one jump step. Returns true when a jump executed.
pub fn step(
    state: &mut MotionState,
    input: JumpInput,
    jump_locked: bool,
    now: f32,
    tuning: &MotionTuning,
    outbox: &mut TickOutbox,
) -> bool {
    if !state.ended_jump_early && !state.grounded && !input.held && state.velocity.y > 0.0 {
        state.ended_jump_early = true;
    }

    if let Some(pressed_at) = input.pressed_at {
        state.last_jump_pressed_time = pressed_at;
    }

    let fresh = input.pressed_at.is_some();
    if !fresh && !has_buffered_jump(state, now, tuning) {
        return false;
    }

    if jump_locked {
        return false;
    }

    if state.grounded || can_use_coyote(state, now, tuning) {
        execute(state, tuning, outbox);
        return true;
    }

    false
}

fn execute(state: &mut MotionState, tuning: &MotionTuning, outbox: &mut TickOutbox) {
    let coyote = !state.grounded;
    state.ended_jump_early = false;
    state.buffered_jump_available = false;
    state.coyote_available = false;
    state.velocity.y = tuning.jump_power;
    debug!("Jump: coyote={}, velocity.y={}", coyote, state.velocity.y);
    outbox.notify(MotionNotification::Jumped);
}

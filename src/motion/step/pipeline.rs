//! One fixed tick of the motion core, composed from the individual steps.

use bevy::prelude::*;

use super::boost::{self, BoostInput};
use super::commit::constrain_to_tether;
use super::grapple::{self, Aim, GrappleInput};
use super::integrator::{self, HorizontalMode};
use super::jump::{self, JumpInput};
use super::queries::MotionQueries;
use super::sensor;
use crate::motion::{
    Action, BoostState, Facing, GrappleState, InputSnapshot, LatchedEdges, MotionState,
    MotionTuning, TickOutbox,
};

/// Fixed-clock reading for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    pub now: f32,
    pub dt: f32,
}

/// Mutable state records of one character.
pub struct MotionBody<'a> {
    pub motion: &'a mut MotionState,
    pub grapple: &'a mut GrappleState,
    pub boost: &'a mut BoostState,
    pub facing: &'a mut Facing,
}

/// Held input from the latest frame plus the edges drained for this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub held: InputSnapshot,
    pub edges: LatchedEdges,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickResult {
    /// Velocity to commit to the body.
    pub velocity: Vec2,
    /// Instantaneous impulse to apply after the commit.
    pub impulse: Option<Vec2>,
    pub outbox: TickOutbox,
}

/// Sensor, jump, grapple, horizontal, gravity, commit.
pub fn run_tick(
    body: MotionBody<'_>,
    input: TickInput,
    position: Vec2,
    clock: TickClock,
    tuning: &MotionTuning,
    queries: &impl MotionQueries,
) -> TickResult {
    let mut outbox = TickOutbox::default();
    let axes = input.held.move_axes;
    let edges = input.edges;

    let readout = sensor::probe(queries, tuning.grounder_distance);
    sensor::apply_readout(body.motion, readout, clock.now, &mut outbox);

    jump::step(
        body.motion,
        JumpInput {
            pressed_at: edges.jump_pressed_at,
            held: input.held.jump_held,
        },
        body.grapple.jump_locked,
        clock.now,
        tuning,
        &mut outbox,
    );

    if axes.x > 0.0 {
        *body.facing = Facing::Right;
    } else if axes.x < 0.0 {
        *body.facing = Facing::Left;
    }

    grapple::step(
        body.grapple,
        body.boost,
        GrappleInput {
            pressed: edges.has(Action::GrapplePress),
            released: edges.has(Action::GrappleRelease),
        },
        Aim::from_intent(position, axes, *body.facing),
        body.motion.grounded,
        tuning,
        queries,
        &mut outbox,
    );

    boost::update_arming(
        body.boost,
        body.grapple,
        BoostInput {
            pressed: edges.has(Action::BoostPress),
            held: input.held.boost_held,
            released: edges.has(Action::BoostRelease),
        },
        &mut outbox,
    );

    let mut impulse = None;
    let motion = &mut *body.motion;
    match integrator::horizontal_mode(axes.x, body.grapple.attached, body.boost.usable) {
        HorizontalMode::Decelerate => {
            motion.velocity.x =
                integrator::decelerate(motion.velocity.x, motion.grounded, clock.dt, tuning);
        }
        HorizontalMode::Boost => {
            impulse = boost::activate(
                body.boost,
                body.grapple,
                position,
                axes.x,
                input.held.boost_held,
                tuning,
                &mut outbox,
            );
        }
        HorizontalMode::Accelerate => {
            motion.velocity.x = integrator::accelerate(motion.velocity.x, axes.x, clock.dt, tuning);
        }
        HorizontalMode::Tethered => {}
    }

    motion.velocity.y = integrator::apply_gravity(
        motion.velocity.y,
        motion.grounded,
        motion.ended_jump_early,
        clock.dt,
        tuning,
    );

    if let Some(tether) = body.grapple.tether.as_mut() {
        motion.velocity = constrain_to_tether(
            tether,
            position,
            motion.velocity,
            motion.grounded,
            clock.dt,
            tuning.tether_correction,
        );
    }

    TickResult {
        velocity: motion.velocity,
        impulse,
        outbox,
    }
}

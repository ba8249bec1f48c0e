//! Motion domain: the fixed-rate tick that drives the motion core.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::step::{MotionBody, SpatialMotionQueries, TickClock, TickInput, run_tick};
use crate::motion::{
    BoostState, Facing, GrappleState, InputLatch, InputSnapshot, MotionState, MotionTuning,
    MovementIntent, Player, TickOutbox,
};

/// Outboxes filled during the tick, drained into messages right after it.
#[derive(Resource, Debug, Default)]
pub struct MotionOutbox {
    pub pending: Vec<(Entity, TickOutbox)>,
}

#[allow(clippy::type_complexity)]
pub(crate) fn run_motion_tick(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MotionTuning>,
    snapshot: Res<InputSnapshot>,
    mut latch: ResMut<InputLatch>,
    mut outbox: ResMut<MotionOutbox>,
    mut query: Query<
        (
            Entity,
            &Position,
            &Collider,
            &ComputedMass,
            &mut LinearVelocity,
            &mut MotionState,
            &mut GrappleState,
            &mut BoostState,
            &mut Facing,
            &mut MovementIntent,
        ),
        With<Player>,
    >,
) {
    let clock = TickClock {
        now: time.elapsed_secs(),
        dt: time.delta_secs(),
    };
    let input = TickInput {
        held: *snapshot,
        edges: latch.drain(),
    };

    for (
        entity,
        position,
        collider,
        mass,
        mut velocity,
        mut motion,
        mut grapple,
        mut boost,
        mut facing,
        mut intent,
    ) in &mut query
    {
        // Collisions and impulses from the last physics step feed back in.
        motion.velocity = velocity.0;
        intent.0 = input.held.move_axes;

        let queries = SpatialMotionQueries::new(&spatial_query, entity, collider, position.0);
        let result = run_tick(
            MotionBody {
                motion: &mut *motion,
                grapple: &mut *grapple,
                boost: &mut *boost,
                facing: &mut *facing,
            },
            input,
            position.0,
            clock,
            &tuning,
            &queries,
        );

        velocity.0 = result.velocity;
        if let Some(impulse) = result.impulse {
            velocity.0 += impulse * mass.inverse();
        }

        if !result.outbox.notifications.is_empty() || !result.outbox.cues.is_empty() {
            outbox.pending.push((entity, result.outbox));
        }
    }
}
